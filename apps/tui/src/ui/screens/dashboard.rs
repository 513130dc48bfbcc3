use crate::app::App;
use crate::ui::widgets::charts::render_chart_panel;
use crate::ui::widgets::controls::render_controls;
use crate::ui::widgets::map::render_mini_globe;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use tachyonfx::EffectRenderer;

pub fn render_dashboard(app: &App, f: &mut Frame<'_>) {
    let main_layout = build_main_layout(f);

    render_title_section(app, f, main_layout[0]);
    render_content_section(app, f, main_layout[1]);
    render_status_section(app, f, main_layout[2]);
    render_shortcuts(f, main_layout[3]);
}

fn build_main_layout(f: &Frame<'_>) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Title area
            Constraint::Min(5),    // Content area
            Constraint::Length(3), // Status area
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(2, 1)))
        .to_vec()
}

fn render_title_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let title_block = Block::default()
        .title("== FIFA Soccer World Cup winners ==")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    f.render_widget(title_block, area);

    let title_inner = area.inner(Margin::new(1, 1));
    let title_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(title_inner);

    let title_paragraph = Paragraph::new(Text::from(vec![
        TextLine::from(vec![
            Span::styled(
                "World Cup ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "Winners",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        TextLine::from(Span::styled(
            "22 finals, 1930 - 2022",
            Style::default().fg(Color::Gray),
        )),
    ]))
    .alignment(Alignment::Left);
    f.render_widget(title_paragraph, title_chunks[0]);

    render_mini_globe(f, title_chunks[1], app.animation_counter);
}

fn render_content_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let horizontal_split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(34), Constraint::Percentage(66)])
        .split(area);

    render_controls(app, f, horizontal_split[0]);
    render_chart_section(app, f, horizontal_split[1]);
}

fn render_chart_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    render_chart_panel(app, f, area);

    // Transition effect over the freshly drawn chart
    if let Ok(mut effect) = app.chart_fx.lock() {
        if let Some(effect) = effect.as_mut() {
            let buffer = f.buffer_mut();
            buffer.render_effect(effect, area, app.last_tick);
        }
    }
}

fn render_status_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let status_block = Block::default()
        .title(" Status ")
        .title_style(Style::default().fg(Color::Yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let status_text = if app.status_message.is_empty() {
        Text::from(Span::styled(
            if app.animation_paused {
                "Animation paused"
            } else {
                ""
            },
            Style::default().fg(Color::Gray),
        ))
    } else {
        let style = if app.status_message.starts_with("Error") {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };

        Text::from(Span::styled(&app.status_message, style))
    };

    let status_paragraph = Paragraph::new(status_text)
        .block(status_block)
        .wrap(Wrap { trim: true });
    f.render_widget(status_paragraph, area);
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(Color::Gray);

    let shortcuts = TextLine::from(vec![
        Span::styled("F1", key_style),
        Span::styled(": Help | ", label_style),
        Span::styled("1-3", key_style),
        Span::styled(": Display mode | ", label_style),
        Span::styled("Tab", key_style),
        Span::styled(": Focus picker | ", label_style),
        Span::styled("Enter", key_style),
        Span::styled(": Confirm | ", label_style),
        Span::styled("Del", key_style),
        Span::styled(": Clear | ", label_style),
        Span::styled("p", key_style),
        Span::styled(": Pause | ", label_style),
        Span::styled("q", key_style),
        Span::styled(": Quit", label_style),
    ]);

    let shortcuts_paragraph = Paragraph::new(shortcuts).alignment(Alignment::Center);
    f.render_widget(shortcuts_paragraph, area);
}
