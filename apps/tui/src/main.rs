use clap::Parser;
use color_eyre::Result;
use worldcup_tui::app::App;
use worldcup_tui::cli::CliArgs;
use worldcup_tui::config::init_app_config;
use worldcup_tui::{event, terminal};

fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let config = init_app_config();
    if config.debug {
        eprintln!("Starting with {config:?}");
    }

    // Initialize application state
    let mut app = App::new();
    app.initialize(&config);

    // Check if we're running in a terminal
    if args.headless || !is_terminal() {
        // Run in headless mode
        return event::run_headless(&app, args.json);
    }

    // Setup terminal
    let mut terminal = terminal::setup_terminal()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app);

    // Restore terminal
    terminal::cleanup_terminal_state(true, true);

    // Return the result
    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
