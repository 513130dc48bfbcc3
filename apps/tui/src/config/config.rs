use crate::data::queries::{lookup_country, lookup_year};
use dotenv::dotenv;
use std::env;

const DEFAULT_COUNTRY: &str = "ARG";
const DEFAULT_YEAR: u16 = 1930;

/// Coastline resolution of the map canvases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapDetail {
    #[default]
    High,
    Low,
}

impl MapDetail {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "high" => Some(Self::High),
            "low" => Some(Self::Low),
            _ => None,
        }
    }
}

/// Startup configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub default_country: String,
    pub default_year: u16,
    pub map_detail: MapDetail,
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_country: DEFAULT_COUNTRY.to_string(),
            default_year: DEFAULT_YEAR,
            map_detail: MapDetail::default(),
            debug: false,
        }
    }
}

/// Initializes the application configuration.
///
/// Values come from the environment (optionally via a `.env` file):
/// `WORLDCUP_COUNTRY`, `WORLDCUP_YEAR`, `WORLDCUP_MAP_DETAIL` and
/// `DEBUG`. Invalid values fall back to the defaults with a warning
/// rather than aborting startup.
pub fn init_app_config() -> AppConfig {
    // Load environment variables from .env file
    dotenv().ok();

    let mut config = AppConfig::default();

    if let Ok(code) = env::var("WORLDCUP_COUNTRY") {
        let code = code.trim().to_uppercase();
        match lookup_country(&code) {
            Ok(country) => config.default_country = country.code.to_string(),
            Err(e) => eprintln!("Ignoring WORLDCUP_COUNTRY: {e}"),
        }
    }

    if let Ok(year) = env::var("WORLDCUP_YEAR") {
        match year.trim().parse::<u16>().map(lookup_year) {
            Ok(Ok(tournament)) => config.default_year = tournament.year,
            Ok(Err(e)) => eprintln!("Ignoring WORLDCUP_YEAR: {e}"),
            Err(_) => eprintln!("Ignoring WORLDCUP_YEAR: not a year: {year}"),
        }
    }

    if let Ok(detail) = env::var("WORLDCUP_MAP_DETAIL") {
        match MapDetail::parse(&detail) {
            Some(parsed) => config.map_detail = parsed,
            None => eprintln!("Ignoring WORLDCUP_MAP_DETAIL: expected high or low: {detail}"),
        }
    }

    config.debug = env::var("DEBUG").is_ok_and(|value| value == "1");

    config
}

#[cfg(test)]
mod tests {
    use super::MapDetail;

    #[test]
    fn map_detail_parses_case_insensitively() {
        assert_eq!(MapDetail::parse("HIGH"), Some(MapDetail::High));
        assert_eq!(MapDetail::parse(" low "), Some(MapDetail::Low));
        assert_eq!(MapDetail::parse("medium"), None);
    }
}
