//! About pane

use crate::app::App;
use crate::platform::{SEND_SHORTCUT, TABS_SHORTCUT};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn key_line(key: &str, action: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<12}"), Style::default().fg(Color::Cyan)),
        Span::raw(action.to_string()),
    ])
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let heading = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let content = vec![
        Line::from(Span::styled("Get in touch", heading)),
        Line::from(""),
        Line::from(
            "Fill in the contact form and we will get back to you by email. \
             Name, email and message are required, and you need to accept the \
             privacy policy before the message can be sent.",
        ),
        Line::from(""),
        Line::from(Span::styled("Keys", heading)),
        key_line("Tab", "next field"),
        key_line("Shift+Tab", "previous field"),
        key_line("Space", "toggle checkbox"),
        key_line(SEND_SHORTCUT, "send message"),
        key_line("F1-F3", "switch tab"),
        key_line(TABS_SHORTCUT, "show all panels at once"),
        key_line("Ctrl+C", "quit"),
        Line::from(""),
        Line::from(Span::styled(
            format!("Messages go to {}", app.endpoint),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" About ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.state.scroll_offset as u16, 0));

    frame.render_widget(paragraph, area);
}
