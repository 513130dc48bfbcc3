use crate::ui::widgets::popup::{centered_rect, ClearWidget};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_help(f: &mut Frame<'_>) {
    let area = centered_rect(70, 80, f.area());
    f.render_widget(ClearWidget, area);

    let help_block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let key = |name: &'static str, what: &'static str| {
        TextLine::from(vec![
            Span::styled(
                format!("  {name}"),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" - {what}"), Style::default()),
        ])
    };

    let help_text = vec![
        TextLine::from(Span::styled(
            "World Cup Winners Dashboard",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from(
            "Three views over the 22 World Cup finals played between 1930 and 2022.",
        ),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Keyboard Shortcuts:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        key("F1", "Toggle this help screen"),
        key("Left/Right", "Switch display mode"),
        key("1 / 2 / 3", "Jump to a display mode"),
        key("Tab", "Move focus to the mode's picker and back"),
        key("Up/Down", "Move the cursor in the focused picker"),
        key("Enter", "Confirm the highlighted option"),
        key("Del", "Clear the current selection"),
        key("Esc", "Clear the search filter / leave the picker"),
        key("p", "Pause the animations"),
        key("q", "Quit"),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Display modes:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        TextLine::from("  1 - View All Winners: world map of champions, shaded by titles"),
        TextLine::from("  2 - Select A Country: one country's finals on a timeline"),
        TextLine::from("  3 - Select A Year: winner and runner-up of a single final"),
        TextLine::from(""),
        TextLine::from("The country picker is searchable: just start typing."),
        TextLine::from("No tournaments were played in 1942 and 1946."),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Press Esc to close this help screen",
            Style::default().fg(Color::Yellow),
        )),
    ];

    let help_paragraph = Paragraph::new(Text::from(help_text))
        .block(help_block)
        .wrap(Wrap { trim: true });

    f.render_widget(help_paragraph, area);
}
