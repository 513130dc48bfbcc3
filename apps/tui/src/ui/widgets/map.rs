use crate::app::App;
use crate::config::MapDetail;
use crate::data::queries;
use crate::data::Tournament;
use crate::domain::Placement;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine, Map, MapResolution, Points};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub const GOLD: Color = Color::Rgb(255, 215, 0);
pub const SILVER: Color = Color::Rgb(192, 192, 192);

const COASTLINE: Color = Color::Green;

// Warm five-step ramp for the title-count shading.
const WIN_RAMP: [Color; 5] = [
    Color::Rgb(250, 219, 157),
    Color::Rgb(247, 167, 114),
    Color::Rgb(235, 105, 103),
    Color::Rgb(205, 62, 113),
    Color::Rgb(156, 33, 109),
];

/// Color of a title count on the win ramp.
pub fn win_color(titles: usize, max_titles: usize) -> Color {
    if titles == 0 {
        return Color::DarkGray;
    }

    let steps = WIN_RAMP.len() - 1;
    let span = max_titles.saturating_sub(1).max(1);
    let index = (titles - 1) * steps / span;
    WIN_RAMP[index.min(steps)]
}

const fn resolution(detail: MapDetail) -> MapResolution {
    match detail {
        MapDetail::High => MapResolution::High,
        MapDetail::Low => MapResolution::Low,
    }
}

/// World map of every champion, shaded by title count.
pub fn render_winners_map(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("World Cup Wins by Country")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width < 20 || inner.height < 6 {
        return;
    }

    let counts = queries::title_counts();
    let max_titles = queries::max_titles();

    let champions = counts
        .iter()
        .filter_map(|(code, titles)| {
            let country = queries::lookup_country(code).ok()?;
            Some((country, *titles, win_color(*titles, max_titles)))
        })
        .collect::<Vec<_>>();

    f.render_widget(
        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-180.0, 180.0])
            .y_bounds([-90.0, 90.0])
            .paint(|ctx| {
                ctx.draw(&Map {
                    resolution: resolution(app.map_detail),
                    color: COASTLINE,
                });

                for (country, titles, color) in &champions {
                    ctx.draw(&Circle {
                        x: country.lon,
                        y: country.lat,
                        radius: (*titles as f64).mul_add(1.2, 2.0),
                        color: *color,
                    });
                    ctx.draw(&Points {
                        coords: &[(country.lon, country.lat)],
                        color: *color,
                    });
                }

                // Labels go last so markers cannot overdraw them, and
                // alternate above/below to keep the European cluster
                // legible.
                for (index, (country, titles, color)) in champions.iter().enumerate() {
                    let label_lat = if index % 2 == 0 {
                        country.lat + 6.0
                    } else {
                        country.lat - 9.0
                    };
                    ctx.print(
                        country.lon + 3.0,
                        label_lat.clamp(-85.0, 85.0),
                        TextLine::styled(
                            format!("{} {titles}", country.code),
                            Style::default().fg(*color).add_modifier(Modifier::BOLD),
                        ),
                    );
                }
            }),
        inner,
    );
}

/// World map of one final: champion in gold, runner-up in silver.
pub fn render_final_map(app: &App, f: &mut Frame<'_>, area: Rect, tournament: &Tournament) {
    let block = Block::default()
        .title(format!(
            "World Cup Winner & Runner-up in {}",
            tournament.year
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width < 20 || inner.height < 7 {
        return;
    }

    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(inner);

    let winner = queries::lookup_country(tournament.winner).ok();
    let runner_up = queries::lookup_country(tournament.runner_up).ok();
    let pulse = (app.animation_counter * 3.0).sin().mul_add(0.6, 3.4);

    f.render_widget(
        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-180.0, 180.0])
            .y_bounds([-90.0, 90.0])
            .paint(|ctx| {
                ctx.draw(&Map {
                    resolution: resolution(app.map_detail),
                    color: COASTLINE,
                });

                if let Some(country) = runner_up {
                    ctx.draw(&Circle {
                        x: country.lon,
                        y: country.lat,
                        radius: 3.0,
                        color: SILVER,
                    });
                    ctx.draw(&Points {
                        coords: &[(country.lon, country.lat)],
                        color: SILVER,
                    });
                }

                if let Some(country) = winner {
                    ctx.draw(&Circle {
                        x: country.lon,
                        y: country.lat,
                        radius: pulse,
                        color: GOLD,
                    });
                    ctx.draw(&Points {
                        coords: &[(country.lon, country.lat)],
                        color: GOLD,
                    });
                }

                if let Some(country) = runner_up {
                    ctx.print(
                        country.lon + 3.0,
                        country.lat - 9.0,
                        TextLine::styled(country.code, Style::default().fg(SILVER)),
                    );
                }
                if let Some(country) = winner {
                    ctx.print(
                        country.lon + 3.0,
                        country.lat + 6.0,
                        TextLine::styled(
                            country.code,
                            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                        ),
                    );
                }
            }),
        split[0],
    );

    let legend = TextLine::from(vec![
        Span::styled("■ ", Style::default().fg(GOLD)),
        Span::raw(format!(
            "{}: {}",
            Placement::Winner.label(),
            tournament.winner
        )),
        Span::raw("  |  "),
        Span::styled("■ ", Style::default().fg(SILVER)),
        Span::raw(format!(
            "{}: {}",
            Placement::RunnerUp.label(),
            tournament.runner_up
        )),
    ]);
    f.render_widget(
        Paragraph::new(legend).alignment(ratatui::layout::Alignment::Center),
        split[1],
    );
}

/// Small spinning globe for the title bar.
pub fn render_mini_globe(f: &mut Frame<'_>, area: Rect, animation: f64) {
    if area.width < 4 || area.height < 4 {
        return;
    }

    let size = area.width.min(area.height);
    let square = Rect {
        x: area.x + (area.width - size) / 2,
        y: area.y + (area.height - size) / 2,
        width: size,
        height: size,
    };

    f.render_widget(
        Canvas::default()
            .x_bounds([0.0, f64::from(square.width)])
            .y_bounds([0.0, f64::from(square.height)])
            .paint(|ctx| {
                let width = f64::from(square.width);
                let height = f64::from(square.height);
                let center_x = width / 2.0;
                let center_y = height / 2.0;
                let radius = width.min(height) / 2.0 * 0.8;

                ctx.draw(&Circle {
                    x: center_x,
                    y: center_y,
                    radius,
                    color: Color::Cyan,
                });

                // Equator
                ctx.draw(&CanvasLine {
                    x1: center_x - radius,
                    y1: center_y,
                    x2: center_x + radius,
                    y2: center_y,
                    color: Color::DarkGray,
                });

                // Rotating meridian: a chord sweeping across the disc
                let offset = animation.cos() * radius * 0.9;
                let half = radius.mul_add(radius, -(offset * offset)).max(0.0).sqrt();
                ctx.draw(&CanvasLine {
                    x1: center_x + offset,
                    y1: center_y - half,
                    x2: center_x + offset,
                    y2: center_y + half,
                    color: Color::LightCyan,
                });

                ctx.draw(&Circle {
                    x: center_x,
                    y: center_y,
                    radius: radius * 0.06,
                    color: GOLD,
                });
            }),
        square,
    );
}

#[cfg(test)]
mod tests {
    use super::{win_color, WIN_RAMP};
    use ratatui::style::Color;

    #[test]
    fn win_color_spans_the_ramp() {
        assert_eq!(win_color(1, 5), WIN_RAMP[0]);
        assert_eq!(win_color(5, 5), WIN_RAMP[4]);
        assert_eq!(win_color(0, 5), Color::DarkGray);
    }

    #[test]
    fn win_color_handles_a_flat_field() {
        // Every champion on one title still gets a ramp color.
        assert_eq!(win_color(1, 1), WIN_RAMP[0]);
    }
}
