use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use ratzilla::ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line as TextLine, Span, Text},
    widgets::{
        canvas::{Canvas, Circle, Map, MapResolution, Points},
        Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Scrollbar,
        ScrollbarOrientation, ScrollbarState, Table, Tabs, Wrap,
    },
    Terminal,
};
use ratzilla::{DomBackend, WebRenderer};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Request, RequestInit, RequestMode, Response};

mod animation;

use animation::{advance_pulse, AnimationMode};

const GOLD: Color = Color::Rgb(255, 215, 0);
const SILVER: Color = Color::Rgb(192, 192, 192);

const WIN_RAMP: [Color; 5] = [
    Color::Rgb(250, 219, 157),
    Color::Rgb(247, 167, 114),
    Color::Rgb(235, 105, 103),
    Color::Rgb(205, 62, 113),
    Color::Rgb(156, 33, 109),
];

/// The headless `--json` export of the TUI, served as worldcup.json.
#[derive(serde::Deserialize)]
struct WorldCupExport {
    total_tournaments: usize,
    first_year: u16,
    last_year: u16,
    distinct_champions: usize,
    title_counts: Vec<TitleCount>,
    tournaments: Vec<TournamentRow>,
}

#[derive(serde::Deserialize, Clone)]
struct TitleCount {
    country: String,
    name: String,
    titles: usize,
    lon: f64,
    lat: f64,
}

#[derive(serde::Deserialize, Clone)]
struct TournamentRow {
    year: u16,
    winner: String,
    runner_up: String,
}

fn main() -> io::Result<()> {
    let data = Rc::new(RefCell::new(None::<WorldCupExport>));
    let tab_index = Rc::new(RefCell::new(0_usize));
    let row_offset = Rc::new(RefCell::new(0_usize));
    let pulse = Rc::new(RefCell::new((0.0_f64, None::<f64>)));

    spawn_local(fetch_export(data.clone()));

    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    terminal.on_key_event({
        let tab_index = tab_index.clone();
        let row_offset = row_offset.clone();
        move |event| match event.code {
            ratzilla::event::KeyCode::Left => {
                let mut index = tab_index.borrow_mut();
                *index = if *index == 0 { 2 } else { *index - 1 };
                *row_offset.borrow_mut() = 0;
            }
            ratzilla::event::KeyCode::Right => {
                let mut index = tab_index.borrow_mut();
                *index = (*index + 1) % 3;
                *row_offset.borrow_mut() = 0;
            }
            ratzilla::event::KeyCode::Up => {
                let mut offset = row_offset.borrow_mut();
                *offset = offset.saturating_sub(1);
            }
            ratzilla::event::KeyCode::Down => {
                let mut offset = row_offset.borrow_mut();
                *offset = (*offset + 1).min(2000);
            }
            ratzilla::event::KeyCode::Char('1') => {
                *tab_index.borrow_mut() = 0;
                *row_offset.borrow_mut() = 0;
            }
            ratzilla::event::KeyCode::Char('2') => {
                *tab_index.borrow_mut() = 1;
                *row_offset.borrow_mut() = 0;
            }
            ratzilla::event::KeyCode::Char('3') => {
                *tab_index.borrow_mut() = 2;
                *row_offset.borrow_mut() = 0;
            }
            _ => {}
        }
    });

    terminal.draw_web(move |f| {
        let area = f.area();
        let block = Block::default()
            .title("World Cup Winners")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray));
        let inner = block.inner(area).inner(Margin::new(1, 1));
        f.render_widget(block, area);

        let (counter, last_tick) = *pulse.borrow();
        let now_seconds = js_sys::Date::now() / 1000.0;
        let advanced = advance_pulse(counter, last_tick, now_seconds, AnimationMode::Running);
        *pulse.borrow_mut() = advanced;

        let data = data.borrow();
        if let Some(export) = data.as_ref() {
            let index = *tab_index.borrow();
            let row_offset = *row_offset.borrow();
            render_dashboard(export, index, row_offset, advanced.0, f, inner);
        } else {
            let paragraph = Paragraph::new(Text::from(TextLine::from("Loading worldcup.json...")))
                .alignment(Alignment::Center);
            f.render_widget(paragraph, inner);
        }
    });

    Ok(())
}

fn render_dashboard(
    export: &WorldCupExport,
    tab_index: usize,
    row_offset: usize,
    pulse: f64,
    f: &mut ratzilla::ratatui::Frame<'_>,
    area: Rect,
) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(12),
            Constraint::Length(8),
        ])
        .split(area);

    render_header(export, f, main_layout[0]);
    render_gap(f, main_layout[1]);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(main_layout[2]);

    render_map_panel(export, pulse, f, content[0]);

    let charts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(content[1]);

    render_titles_chart(export, f, charts[0]);
    render_appearances_chart(export, f, charts[1]);

    render_footer(export, tab_index, row_offset, f, main_layout[3]);
}

fn render_header(export: &WorldCupExport, f: &mut ratzilla::ratatui::Frame<'_>, area: Rect) {
    let line = TextLine::from(vec![Span::styled(
        format!(
            "Tournaments: {} ({}-{})  Champions: {}",
            export.total_tournaments, export.first_year, export.last_year,
            export.distinct_champions
        ),
        Style::default().fg(Color::White),
    )]);

    let block = Block::default()
        .title("Overview")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(Text::from(line))
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn render_gap(f: &mut ratzilla::ratatui::Frame<'_>, area: Rect) {
    let paragraph = Paragraph::new("")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    f.render_widget(paragraph, area);
}

fn render_map_panel(
    export: &WorldCupExport,
    pulse: f64,
    f: &mut ratzilla::ratatui::Frame<'_>,
    area: Rect,
) {
    let block = Block::default()
        .title("World Cup Wins by Country")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if export.title_counts.is_empty() {
        let paragraph = Paragraph::new("No champions in the export")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, inner);
        return;
    }

    let max_titles = export
        .title_counts
        .iter()
        .map(|entry| entry.titles)
        .max()
        .unwrap_or(1);

    let champions = export
        .title_counts
        .iter()
        .map(|entry| (entry, title_color(entry.titles, max_titles)))
        .collect::<Vec<_>>();
    let pulse_radius = pulse.sin().mul_add(0.8, 3.6);

    f.render_widget(
        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-180.0, 180.0])
            .y_bounds([-90.0, 90.0])
            .paint(|ctx| {
                ctx.draw(&Map {
                    resolution: MapResolution::High,
                    color: Color::Green,
                });

                for (index, (entry, color)) in champions.iter().enumerate() {
                    // The record holder gets the animated halo.
                    let radius = if index == 0 {
                        pulse_radius
                    } else {
                        (entry.titles as f64).mul_add(1.2, 2.0)
                    };

                    ctx.draw(&Circle {
                        x: entry.lon,
                        y: entry.lat,
                        radius,
                        color: *color,
                    });
                    ctx.draw(&Points {
                        coords: &[(entry.lon, entry.lat)],
                        color: *color,
                    });
                }

                for (index, (entry, color)) in champions.iter().enumerate() {
                    let label_lat = if index % 2 == 0 {
                        entry.lat + 6.0
                    } else {
                        entry.lat - 9.0
                    };
                    ctx.print(
                        entry.lon + 3.0,
                        label_lat.clamp(-85.0, 85.0),
                        TextLine::styled(
                            format!("{} {}", entry.country, entry.titles),
                            Style::default().fg(*color).add_modifier(Modifier::BOLD),
                        ),
                    );
                }
            }),
        inner,
    );
}

fn render_titles_chart(export: &WorldCupExport, f: &mut ratzilla::ratatui::Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("World Cup Wins")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chart_split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(64), Constraint::Percentage(36)])
        .split(inner);

    let max_titles = export
        .title_counts
        .iter()
        .map(|entry| entry.titles)
        .max()
        .unwrap_or(1);

    let bars: Vec<Bar<'_>> = export
        .title_counts
        .iter()
        .map(|entry| {
            Bar::default()
                .value(entry.titles as u64)
                .label(TextLine::from(entry.country.clone()))
                .style(Style::default().fg(title_color(entry.titles, max_titles)))
                .value_style(Style::default().fg(Color::White))
        })
        .collect();

    let chart = BarChart::default()
        .block(Block::default())
        .data(BarGroup::default().bars(&bars))
        .max(max_titles as u64)
        .bar_gap(1)
        .bar_width(4);

    f.render_widget(chart, chart_split[0]);

    let mut legend_lines = vec![
        TextLine::from(Span::styled("Titles", Style::default().fg(Color::Gray))),
        TextLine::from(""),
    ];

    for entry in &export.title_counts {
        legend_lines.push(TextLine::from(vec![
            Span::styled(
                "■ ",
                Style::default().fg(title_color(entry.titles, max_titles)),
            ),
            Span::styled(
                format!("{}  {}", entry.name, entry.titles),
                Style::default().fg(Color::White).add_modifier(Modifier::DIM),
            ),
        ]));
    }

    let legend = Paragraph::new(Text::from(legend_lines))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });
    f.render_widget(legend, chart_split[1]);
}

fn render_appearances_chart(
    export: &WorldCupExport,
    f: &mut ratzilla::ratatui::Frame<'_>,
    area: Rect,
) {
    let block = Block::default()
        .title("Final Appearances")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let appearances = count_appearances(export);
    let max_value = appearances
        .iter()
        .map(|(_, won, lost)| won + lost)
        .max()
        .unwrap_or(1);

    let bars: Vec<Bar<'_>> = appearances
        .iter()
        .take(8)
        .map(|(code, won, lost)| {
            let color = if *won > 0 { GOLD } else { SILVER };
            Bar::default()
                .value((won + lost) as u64)
                .label(TextLine::from(code.clone()))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::White))
        })
        .collect();

    let chart = BarChart::default()
        .block(Block::default())
        .data(BarGroup::default().bars(&bars))
        .max(max_value as u64)
        .bar_gap(1)
        .bar_width(4);

    f.render_widget(chart, inner);
}

/// (code, finals won, finals lost), most appearances first.
fn count_appearances(export: &WorldCupExport) -> Vec<(String, usize, usize)> {
    let mut counts: Vec<(String, usize, usize)> = Vec::new();

    for row in &export.tournaments {
        for (code, is_winner) in [(&row.winner, true), (&row.runner_up, false)] {
            match counts.iter_mut().find(|(entry, _, _)| entry == code) {
                Some((_, won, lost)) => {
                    if is_winner {
                        *won += 1;
                    } else {
                        *lost += 1;
                    }
                }
                None => counts.push((
                    code.clone(),
                    usize::from(is_winner),
                    usize::from(!is_winner),
                )),
            }
        }
    }

    counts.sort_by(|(code_a, won_a, lost_a), (code_b, won_b, lost_b)| {
        (won_b + lost_b)
            .cmp(&(won_a + lost_a))
            .then_with(|| code_a.cmp(code_b))
    });
    counts
}

fn render_footer(
    export: &WorldCupExport,
    tab_index: usize,
    row_offset: usize,
    f: &mut ratzilla::ratatui::Frame<'_>,
    area: Rect,
) {
    let tabs = ["Champions", "All finals", "Appearances"];
    let tab_titles = tabs
        .iter()
        .map(|title| TextLine::from(*title))
        .collect::<Vec<_>>();

    let info = TextLine::from(vec![
        Span::styled("Tables", Style::default().fg(Color::Gray)),
        Span::raw("  "),
        Span::raw(format!(
            "{} finals • {} champions",
            export.total_tournaments, export.distinct_champions
        )),
        Span::raw("  "),
        Span::styled("1-3 / Arrows", Style::default().fg(Color::Gray)),
    ]);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let tabs = Tabs::new(tab_titles)
        .select(tab_index)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(GOLD)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));

    let info_paragraph = Paragraph::new(Text::from(info)).alignment(Alignment::Center);
    f.render_widget(info_paragraph, layout[0]);
    f.render_widget(tabs, layout[1]);
    render_gap(f, layout[2]);

    let table_area = layout[3];

    match tab_index {
        0 => render_champions_table(export, row_offset, f, table_area),
        1 => render_finals_table(export, row_offset, f, table_area),
        2 => render_appearances_table(export, row_offset, f, table_area),
        _ => {}
    }
}

fn table_header(cells: Vec<&'static str>) -> Row<'static> {
    Row::new(cells.into_iter().map(Cell::from).collect::<Vec<_>>()).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
}

fn render_champions_table(
    export: &WorldCupExport,
    row_offset: usize,
    f: &mut ratzilla::ratatui::Frame<'_>,
    area: Rect,
) {
    let rows = export.title_counts.iter().skip(row_offset).take(18).map(|entry| {
        Row::new(vec![
            Cell::from(entry.country.clone()),
            Cell::from(entry.name.clone()),
            Cell::from(entry.titles.to_string()),
        ])
        .style(Style::default().fg(Color::White))
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Length(18),
            Constraint::Length(8),
        ],
    )
    .header(table_header(vec!["Code", "Country", "Titles"]))
    .column_spacing(1);

    f.render_widget(table, area);
}

fn render_finals_table(
    export: &WorldCupExport,
    row_offset: usize,
    f: &mut ratzilla::ratatui::Frame<'_>,
    area: Rect,
) {
    let rows = export.tournaments.iter().skip(row_offset).take(18).map(|row| {
        Row::new(vec![
            Cell::from(row.year.to_string()),
            Cell::from(row.winner.clone()).style(Style::default().fg(GOLD)),
            Cell::from(row.runner_up.clone()).style(Style::default().fg(SILVER)),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Length(10),
            Constraint::Length(12),
        ],
    )
    .header(table_header(vec!["Year", "Winner", "Runner-up"]))
    .column_spacing(1);

    f.render_widget(table, area);

    let mut scrollbar_state = ScrollbarState::new(export.tournaments.len())
        .position(row_offset)
        .viewport_content_length(18.min(area.height.saturating_sub(1) as usize));
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .thumb_style(Style::default().fg(GOLD));
    let scroll_area = Rect {
        x: area.x,
        y: area.y.saturating_add(1),
        width: area.width,
        height: area.height.saturating_sub(1),
    };
    f.render_stateful_widget(scrollbar, scroll_area, &mut scrollbar_state);
}

fn render_appearances_table(
    export: &WorldCupExport,
    row_offset: usize,
    f: &mut ratzilla::ratatui::Frame<'_>,
    area: Rect,
) {
    let appearances = count_appearances(export);

    let rows = appearances.iter().skip(row_offset).take(18).map(|(code, won, lost)| {
        Row::new(vec![
            Cell::from(code.clone()),
            Cell::from((won + lost).to_string()),
            Cell::from(won.to_string()),
            Cell::from(lost.to_string()),
        ])
        .style(Style::default().fg(Color::White))
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Length(8),
            Constraint::Length(6),
            Constraint::Length(6),
        ],
    )
    .header(table_header(vec!["Code", "Finals", "Won", "Lost"]))
    .column_spacing(1);

    f.render_widget(table, area);
}

fn title_color(titles: usize, max_titles: usize) -> Color {
    if titles == 0 {
        return Color::DarkGray;
    }

    let steps = WIN_RAMP.len() - 1;
    let span = max_titles.saturating_sub(1).max(1);
    let index = (titles - 1) * steps / span;
    WIN_RAMP[index.min(steps)]
}

async fn fetch_export(store: Rc<RefCell<Option<WorldCupExport>>>) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let Ok(request) = Request::new_with_str_and_init("worldcup.json", &opts) else {
        return;
    };

    let Ok(response_value) =
        wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request)).await
    else {
        return;
    };

    let Ok(response) = response_value.dyn_into::<Response>() else {
        web_sys::console::error_1(&"Failed to read response".into());
        return;
    };

    let Ok(body) = response.json() else {
        web_sys::console::error_1(&"Failed to read worldcup.json body".into());
        return;
    };

    let Ok(json) = wasm_bindgen_futures::JsFuture::from(body).await else {
        web_sys::console::error_1(&"Failed to read worldcup.json body".into());
        return;
    };

    let data = match serde_wasm_bindgen::from_value::<WorldCupExport>(json) {
        Ok(data) => data,
        Err(error) => {
            web_sys::console::error_1(&format!("Failed to parse worldcup.json: {error}").into());
            return;
        }
    };

    *store.borrow_mut() = Some(data);
}

#[cfg(test)]
mod tests {
    use super::{count_appearances, title_color, TournamentRow, WorldCupExport, WIN_RAMP};

    fn export_with(tournaments: Vec<TournamentRow>) -> WorldCupExport {
        WorldCupExport {
            total_tournaments: tournaments.len(),
            first_year: tournaments.first().map_or(0, |t| t.year),
            last_year: tournaments.last().map_or(0, |t| t.year),
            distinct_champions: 0,
            title_counts: Vec::new(),
            tournaments,
        }
    }

    fn row(year: u16, winner: &str, runner_up: &str) -> TournamentRow {
        TournamentRow {
            year,
            winner: winner.to_string(),
            runner_up: runner_up.to_string(),
        }
    }

    #[test]
    fn appearances_split_wins_and_losses() {
        let export = export_with(vec![
            row(1974, "DEU", "NLD"),
            row(1978, "ARG", "NLD"),
            row(1990, "DEU", "ARG"),
        ]);

        let appearances = count_appearances(&export);

        assert_eq!(appearances[0], ("ARG".to_string(), 1, 1));
        assert_eq!(appearances[1], ("DEU".to_string(), 2, 0));
        assert_eq!(appearances[2], ("NLD".to_string(), 0, 2));
    }

    #[test]
    fn title_color_spans_the_ramp() {
        assert_eq!(title_color(1, 5), WIN_RAMP[0]);
        assert_eq!(title_color(5, 5), WIN_RAMP[4]);
        assert_eq!(title_color(1, 1), WIN_RAMP[0]);
    }
}
