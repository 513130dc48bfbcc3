use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(name = "worldcup-tui", version, about = "World Cup winners TUI")]
pub struct CliArgs {
    /// Print stats and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless stats as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the default country (ISO-3 code)
    #[arg(long, value_name = "CODE")]
    pub country: Option<String>,

    /// Override the default tournament year
    #[arg(long, value_name = "YEAR")]
    pub year: Option<u16>,

    /// Override the map coastline detail (high or low)
    #[arg(long = "map-detail", value_name = "DETAIL")]
    pub map_detail: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(country) = &self.country {
            std::env::set_var("WORLDCUP_COUNTRY", country);
        }
        if let Some(year) = self.year {
            std::env::set_var("WORLDCUP_YEAR", year.to_string());
        }
        if let Some(detail) = &self.map_detail {
            std::env::set_var("WORLDCUP_MAP_DETAIL", detail);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}
