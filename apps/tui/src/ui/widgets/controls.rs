use crate::app::{App, PanelFocus};
use crate::data::queries;
use crate::domain::ViewMode;
use crate::ui::widgets::map::GOLD;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

/// First visible row of a list so the cursor stays inside the window.
pub const fn scroll_offset(
    total_rows: usize,
    max_visible_rows: usize,
    selected_index: usize,
) -> usize {
    if total_rows <= max_visible_rows {
        return 0;
    }

    if selected_index >= max_visible_rows {
        return selected_index.saturating_sub(max_visible_rows) + 1;
    }

    0
}

/// The control column: mode radio on top, then whichever picker the
/// current mode uses. Pickers of the other modes stay hidden.
pub fn render_controls(app: &App, f: &mut Frame<'_>, area: Rect) {
    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(4)])
        .split(area);

    render_mode_picker(app, f, split[0]);

    match app.view_mode {
        ViewMode::AllWinners => render_dataset_panel(f, split[1]),
        ViewMode::CountryHistory => render_country_picker(app, f, split[1]),
        ViewMode::ByYear => render_year_picker(app, f, split[1]),
    }
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Green)
    }
}

fn selection_style(is_selected: bool, focused: bool) -> Style {
    if is_selected && focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else if is_selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

fn render_mode_picker(app: &App, f: &mut Frame<'_>, area: Rect) {
    let focused = app.focus == PanelFocus::ModePicker;
    let block = Block::default()
        .title(" Display ")
        .title_style(Style::default().fg(Color::Green))
        .borders(Borders::ALL)
        .border_style(border_style(focused));

    let mut lines = Vec::new();
    for (index, mode) in ViewMode::ALL.iter().enumerate() {
        let is_selected = index == app.view_mode_index;
        let prefix = if is_selected { "(*)" } else { "( )" };
        lines.push(TextLine::from(Span::styled(
            format!("{prefix} {}", mode.label()),
            selection_style(is_selected, focused),
        )));
    }
    lines.push(TextLine::from(Span::styled(
        format!("   {}", app.view_mode.as_str()),
        Style::default().fg(Color::Gray),
    )));

    let paragraph = Paragraph::new(Text::from(lines)).block(block);
    f.render_widget(paragraph, area);
}

fn render_dataset_panel(f: &mut Frame<'_>, area: Rect) {
    let counts = queries::title_counts();
    let years = queries::years();
    let first = years.first().copied().unwrap_or(0);
    let last = years.last().copied().unwrap_or(0);

    let lines = vec![
        TextLine::from(format!("{} tournaments", years.len())),
        TextLine::from(format!("{first} - {last}")),
        TextLine::from(format!("{} different champions", counts.len())),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "No finals in 1942 and 1946",
            Style::default().fg(Color::Gray),
        )),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title(" Dataset ")
                .title_style(Style::default().fg(Color::Green))
                .borders(Borders::ALL)
                .border_style(border_style(false)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn render_country_picker(app: &App, f: &mut Frame<'_>, area: Rect) {
    let focused = app.focus == PanelFocus::CountryPicker;
    let block = Block::default()
        .title(" Country ")
        .title_style(Style::default().fg(Color::Green))
        .borders(Borders::ALL)
        .border_style(border_style(focused));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cursor = if focused {
        // Blinking block cursor on the search filter
        if (app.animation_counter * 2.0).sin() > 0.0 {
            "#"
        } else {
            " "
        }
    } else {
        ""
    };

    let mut lines = vec![
        TextLine::from(Span::styled(
            format!("> {}{cursor}", app.country_filter),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        current_value_line(
            app.selected_country
                .map(|code| format!("{code}  {}", country_name(code))),
            "Select a Country...",
        ),
    ];

    let visible_rows = inner.height.saturating_sub(2) as usize;
    let offset = scroll_offset(
        app.filtered_countries.len(),
        visible_rows,
        app.country_cursor,
    );

    for (index, code) in app
        .filtered_countries
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_rows)
    {
        let at_cursor = index == app.country_cursor;
        let is_value = app.selected_country == Some(*code);
        let prefix = if at_cursor { ">" } else { " " };
        let marker = if is_value { "*" } else { " " };

        let mut style = selection_style(at_cursor, focused);
        if is_value && !at_cursor {
            style = style.fg(GOLD);
        }

        lines.push(TextLine::from(Span::styled(
            format!("{prefix}{marker}{code}  {}", country_name(code)),
            style,
        )));
    }

    if app.filtered_countries.is_empty() {
        lines.push(TextLine::from(Span::styled(
            "No match",
            Style::default().fg(Color::Red),
        )));
    }

    f.render_widget(Paragraph::new(Text::from(lines)), inner);
}

fn render_year_picker(app: &App, f: &mut Frame<'_>, area: Rect) {
    let focused = app.focus == PanelFocus::YearPicker;
    let block = Block::default()
        .title(" Year ")
        .title_style(Style::default().fg(Color::Green))
        .borders(Borders::ALL)
        .border_style(border_style(focused));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![current_value_line(
        app.selected_year.map(|year| year.to_string()),
        "Select a Year...",
    )];

    let visible_rows = inner.height.saturating_sub(1) as usize;
    let offset = scroll_offset(app.years.len(), visible_rows, app.year_cursor);

    for (index, year) in app
        .years
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_rows)
    {
        let at_cursor = index == app.year_cursor;
        let is_value = app.selected_year == Some(*year);
        let prefix = if at_cursor { ">" } else { " " };
        let marker = if is_value { "*" } else { " " };

        let mut style = selection_style(at_cursor, focused);
        if is_value && !at_cursor {
            style = style.fg(GOLD);
        }

        let winner = queries::final_for_year(*year).map_or("", |t| t.winner);
        lines.push(TextLine::from(Span::styled(
            format!("{prefix}{marker}{year}  {winner}"),
            style,
        )));
    }

    f.render_widget(Paragraph::new(Text::from(lines)), inner);
}

fn current_value_line(value: Option<String>, placeholder: &str) -> TextLine<'static> {
    value.map_or_else(
        || {
            TextLine::from(Span::styled(
                placeholder.to_string(),
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            ))
        },
        |value| {
            TextLine::from(vec![
                Span::styled("Selected: ", Style::default().fg(Color::Gray)),
                Span::styled(value, Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
            ])
        },
    )
}

fn country_name(code: &str) -> &'static str {
    queries::lookup_country(code).map_or("(unknown)", |c| c.name)
}

#[cfg(test)]
mod tests {
    use super::scroll_offset;

    #[test]
    fn short_lists_never_scroll() {
        assert_eq!(scroll_offset(5, 10, 4), 0);
    }

    #[test]
    fn cursor_below_the_window_scrolls_down() {
        assert_eq!(scroll_offset(22, 10, 9), 0);
        assert_eq!(scroll_offset(22, 10, 10), 1);
        assert_eq!(scroll_offset(22, 10, 21), 12);
    }
}
