//! Settings pane

use crate::app::App;
use crate::config::{ContactConfig, SERVER_URL_ENV};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn setting(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(Color::DarkGray)),
        Span::raw(value),
    ])
}

/// Draw the settings pane
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let config = &app.config;

    let timeout = config
        .request_timeout_secs
        .map(|secs| format!("{secs}s"))
        .unwrap_or_else(|| "client default".to_string());
    let path = ContactConfig::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "unavailable".to_string());

    let content = vec![
        Line::from(Span::styled(
            "Contact Settings",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        setting("Server", config.server_url().to_string()),
        setting("Endpoint", app.endpoint.clone()),
        setting("Request timeout", timeout),
        setting(
            "Tab headers",
            if app.state.tabs.headers_visible() { "shown" } else { "hidden" }.to_string(),
        ),
        Line::from(""),
        setting("Config file", path),
        Line::from(Span::styled(
            format!("{SERVER_URL_ENV} overrides the server address."),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("w", Style::default().fg(Color::Cyan)),
            Span::raw(" to save the current settings"),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Settings ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.state.scroll_offset as u16, 0));

    frame.render_widget(paragraph, area);
}
