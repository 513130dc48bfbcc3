use color_eyre::Result;
use crossterm::event::{self, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use std::time::Duration;

use crate::app::{handle_input, App};
use crate::data::queries;
use crate::ui;

/// Run the main application event loop
pub fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    loop {
        // Update animations
        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    handle_input(app, key.code);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_))
                | Err(_) => {
                    // Ignore non-key events
                }
            }
        }
    }
    Ok(())
}

/// Run the application in headless mode (no UI)
pub fn run_headless(app: &App, json: bool) -> Result<()> {
    let stats = build_headless_stats(app);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        render_headless_stats(&stats);
    }

    Ok(())
}

fn render_headless_stats(stats: &HeadlessStats) {
    println!("\nWorld Cup Stats");
    println!("===============");
    println!(
        "Tournaments: {} ({}-{})",
        stats.total_tournaments, stats.first_year, stats.last_year
    );
    println!("Distinct champions: {}", stats.distinct_champions);

    println!("\nTitles by Country:");
    for entry in &stats.title_counts {
        println!("- {} {}: {}", entry.country, entry.name, entry.titles);
    }

    if let Some(report) = &stats.country {
        let wins = join_years(&report.winning_years);
        let losses = join_years(&report.runner_up_years);
        println!("\n{} {}:", report.code, report.name);
        println!("- titles: {} ({wins})", report.winning_years.len());
        println!("- lost finals: {} ({losses})", report.runner_up_years.len());
    }

    if let Some(report) = &stats.year {
        println!("\n{} final:", report.year);
        println!("- Winner: {} {}", report.winner, report.winner_name);
        println!("- Runner-up: {} {}", report.runner_up, report.runner_up_name);
    }

    println!("\nFinals:");
    for row in &stats.tournaments {
        println!("- {}: {} def. {}", row.year, row.winner, row.runner_up);
    }
}

fn join_years(years: &[u16]) -> String {
    if years.is_empty() {
        return "none".to_string();
    }

    years
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn build_headless_stats(app: &App) -> HeadlessStats {
    let title_counts = queries::title_counts()
        .into_iter()
        .map(|(code, titles)| {
            let country = queries::lookup_country(code).ok();
            TitleCount {
                country: code.to_string(),
                name: country_name(code).to_string(),
                titles,
                lon: country.map_or(0.0, |c| c.lon),
                lat: country.map_or(0.0, |c| c.lat),
            }
        })
        .collect::<Vec<_>>();

    let tournaments = crate::data::TOURNAMENTS
        .iter()
        .map(|t| TournamentRow {
            year: t.year,
            winner: t.winner.to_string(),
            runner_up: t.runner_up.to_string(),
        })
        .collect::<Vec<_>>();

    let country = app.selected_country.map(|code| CountryReport {
        code: code.to_string(),
        name: country_name(code).to_string(),
        winning_years: queries::winning_years(code),
        runner_up_years: queries::runner_up_years(code),
    });

    let year = app
        .selected_year
        .and_then(queries::final_for_year)
        .map(|t| YearReport {
            year: t.year,
            winner: t.winner.to_string(),
            winner_name: country_name(t.winner).to_string(),
            runner_up: t.runner_up.to_string(),
            runner_up_name: country_name(t.runner_up).to_string(),
        });

    HeadlessStats {
        generated_at: chrono::Utc::now().to_rfc3339(),
        total_tournaments: tournaments.len(),
        first_year: tournaments.first().map_or(0, |t| t.year),
        last_year: tournaments.last().map_or(0, |t| t.year),
        distinct_champions: title_counts.len(),
        title_counts,
        tournaments,
        country,
        year,
    }
}

fn country_name(code: &str) -> &'static str {
    queries::lookup_country(code).map_or("(unknown)", |c| c.name)
}

/// Export consumed by the web dashboard as `worldcup.json`.
#[derive(serde::Serialize)]
pub struct HeadlessStats {
    generated_at: String,
    total_tournaments: usize,
    first_year: u16,
    last_year: u16,
    distinct_champions: usize,
    title_counts: Vec<TitleCount>,
    tournaments: Vec<TournamentRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    country: Option<CountryReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    year: Option<YearReport>,
}

// Centroids ride along so the web dashboard can paint its map
// without a copy of the country table.
#[derive(serde::Serialize)]
struct TitleCount {
    country: String,
    name: String,
    titles: usize,
    lon: f64,
    lat: f64,
}

#[derive(serde::Serialize)]
struct TournamentRow {
    year: u16,
    winner: String,
    runner_up: String,
}

#[derive(serde::Serialize)]
struct CountryReport {
    code: String,
    name: String,
    winning_years: Vec<u16>,
    runner_up_years: Vec<u16>,
}

#[derive(serde::Serialize)]
struct YearReport {
    year: u16,
    winner: String,
    winner_name: String,
    runner_up: String,
    runner_up_name: String,
}

#[cfg(test)]
mod tests {
    use super::build_headless_stats;
    use crate::app::App;
    use crate::config::AppConfig;

    #[test]
    fn headless_stats_cover_the_whole_dataset() {
        let mut app = App::new();
        app.initialize(&AppConfig::default());

        let stats = build_headless_stats(&app);

        assert_eq!(stats.total_tournaments, 22);
        assert_eq!(stats.first_year, 1930);
        assert_eq!(stats.last_year, 2022);
        assert_eq!(stats.distinct_champions, 8);
        assert_eq!(stats.tournaments.len(), 22);
    }

    #[test]
    fn default_selections_produce_both_reports() {
        let mut app = App::new();
        app.initialize(&AppConfig::default());

        let stats = build_headless_stats(&app);

        let country = stats.country.as_ref().map(|c| c.code.as_str());
        assert_eq!(country, Some("ARG"));
        let year = stats.year.as_ref().map(|y| (y.year, y.winner.as_str()));
        assert_eq!(year, Some((1930, "URY")));
    }

    #[test]
    fn cleared_selections_are_omitted_from_the_export() {
        let mut app = App::new();
        app.initialize(&AppConfig::default());
        app.clear_country();
        app.clear_year();

        let stats = build_headless_stats(&app);
        let json = serde_json::to_string(&stats).unwrap();

        assert!(stats.country.is_none());
        assert!(stats.year.is_none());
        assert!(!json.contains("winning_years"));
        assert!(!json.contains("runner_up_name"));
    }
}
