use crate::app::App;
use crate::data::queries;
use crate::data::Tournament;
use crate::domain::{Placement, ViewMode};
use crate::ui::widgets::map::{self, GOLD, SILVER};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph, Wrap,
};
use ratatui::Frame;

/// The single reactive chart panel: what it shows is a pure function
/// of the current control values.
pub fn render_chart_panel(app: &App, f: &mut Frame<'_>, area: Rect) {
    match app.view_mode {
        ViewMode::AllWinners => render_all_winners(app, f, area),
        ViewMode::CountryHistory => match app.selected_country {
            Some(code) => render_country_view(f, area, code),
            None => render_validation_message(f, area, "Select a Country to see data!"),
        },
        ViewMode::ByYear => match app.selected_year.and_then(queries::final_for_year) {
            Some(tournament) => render_year_view(app, f, area, tournament),
            None => render_validation_message(f, area, "Select a year to see data!"),
        },
    }
}

/// Red message where the chart would be, shown while the active
/// picker has no selection.
fn render_validation_message(f: &mut Frame<'_>, area: Rect, message: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let padding = area.height.saturating_sub(3) / 2;
    let mut lines = vec![TextLine::from(""); padding as usize];
    lines.push(TextLine::from(Span::styled(
        message.to_string(),
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    )));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn render_all_winners(app: &App, f: &mut Frame<'_>, area: Rect) {
    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    map::render_winners_map(app, f, split[0]);
    render_titles_barchart(f, split[1]);
}

/// Title counts as a bar chart, doubling as the map's color scale.
fn render_titles_barchart(f: &mut Frame<'_>, area: Rect) {
    let counts = queries::title_counts();
    let max_titles = queries::max_titles();

    let bars: Vec<Bar<'_>> = counts
        .iter()
        .map(|(code, titles)| {
            Bar::default()
                .value(*titles as u64)
                .label(TextLine::from(*code))
                .style(Style::default().fg(map::win_color(*titles, max_titles)))
                .value_style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title("World Cup Wins")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .data(BarGroup::default().bars(&bars))
        .max(max_titles as u64)
        .bar_gap(1)
        .bar_width(5);

    f.render_widget(chart, area);
}

fn render_country_view(f: &mut Frame<'_>, area: Rect, code: &str) {
    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    render_history_scatter(f, split[0], code);
    render_country_summary(f, split[1], code);
}

/// Scatter timeline of one country's finals: champions on the upper
/// band, lost finals on the lower one.
fn render_history_scatter(f: &mut Frame<'_>, area: Rect, code: &str) {
    let name = queries::lookup_country(code).map_or(code, |c| c.name);

    let wins: Vec<(f64, f64)> = queries::winning_years(code)
        .into_iter()
        .map(|year| (f64::from(year), 1.0))
        .collect();
    let losses: Vec<(f64, f64)> = queries::runner_up_years(code)
        .into_iter()
        .map(|year| (f64::from(year), 0.5))
        .collect();

    let datasets = vec![
        Dataset::default()
            .name("Champions")
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(GOLD))
            .data(&wins),
        Dataset::default()
            .name("Runners-up")
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(SILVER))
            .data(&losses),
    ];

    let x_labels = vec![
        Span::raw("1930"),
        Span::raw("1954"),
        Span::raw("1978"),
        Span::raw("2002"),
        Span::raw("2022"),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(format!("{name}'s World Cup History"))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .x_axis(
            Axis::default()
                .title("Year")
                .style(Style::default().fg(Color::Gray))
                .bounds([1926.0, 2026.0])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, 1.5]),
        );

    f.render_widget(chart, area);
}

fn render_country_summary(f: &mut Frame<'_>, area: Rect, code: &str) {
    let wins = queries::winning_years(code);
    let losses = queries::runner_up_years(code);

    let mut lines = vec![TextLine::from(Span::styled(
        format!("{code} has won {} World Cups", wins.len()),
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    if !wins.is_empty() {
        let spans = wins
            .iter()
            .map(|year| {
                Span::styled(
                    format!("WIN {year}  "),
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                )
            })
            .collect::<Vec<_>>();
        lines.push(TextLine::from(spans));
    }

    if !losses.is_empty() {
        let years = losses
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(TextLine::from(Span::styled(
            format!("Lost finals: {years}"),
            Style::default().fg(SILVER),
        )));
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title(" Summary ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn render_year_view(app: &App, f: &mut Frame<'_>, area: Rect, tournament: &Tournament) {
    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(75), Constraint::Percentage(25)])
        .split(area);

    map::render_final_map(app, f, split[0], tournament);
    render_final_summary(f, split[1], tournament);
}

fn render_final_summary(f: &mut Frame<'_>, area: Rect, tournament: &Tournament) {
    let winner = queries::lookup_country(tournament.winner)
        .map_or(tournament.winner, |c| c.name);
    let runner_up = queries::lookup_country(tournament.runner_up)
        .map_or(tournament.runner_up, |c| c.name);
    let winner_titles = queries::winning_years(tournament.winner).len();

    let lines = vec![
        TextLine::from(vec![
            Span::styled(
                format!("{}: ", Placement::Winner.label()),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!("{winner} ({})", tournament.winner),
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ),
        ]),
        TextLine::from(vec![
            Span::styled(
                format!("{}: ", Placement::RunnerUp.label()),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!("{runner_up} ({})", tournament.runner_up),
                Style::default().fg(SILVER),
            ),
        ]),
        TextLine::from(Span::styled(
            format!("{winner} titles through 2022: {winner_titles}"),
            Style::default().fg(Color::Gray),
        )),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title(format!(" The {} Final ", tournament.year))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}
