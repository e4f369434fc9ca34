//! Layout components (tab bar, content area, status bar)

use crate::app::App;
use crate::platform::{SEND_SHORTCUT, TABS_SHORTCUT};
use crate::state::{ContactFocus, Pane, SubmissionState, TabHeader, Tabs};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Screen regions for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// Absent in the expanded view
    pub tab_bar: Option<Rect>,
    pub content: Rect,
    pub status: Rect,
}

/// Split the screen into tab bar, content and status bar
pub fn create_layout(area: Rect, headers_visible: bool) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(if headers_visible { 1 } else { 0 }), // Tab bar
            Constraint::Min(0),                                     // Content
            Constraint::Length(1),                                  // Status bar
        ])
        .split(area);

    AppLayout {
        tab_bar: headers_visible.then_some(chunks[0]),
        content: chunks[1],
        status: chunks[2],
    }
}

/// Click targets of each header, `" name "` followed by a one-column divider
pub fn header_areas(headers: &[TabHeader], bar: Rect) -> Vec<Rect> {
    let right = bar.x.saturating_add(bar.width);
    let mut x = bar.x;
    headers
        .iter()
        .map(|header| {
            let width = (header.name.chars().count() as u16 + 2).min(right.saturating_sub(x));
            let area = Rect {
                x,
                y: bar.y,
                width,
                height: 1,
            };
            x = x.saturating_add(width + 1).min(right);
            area
        })
        .collect()
}

/// Header index under a screen position, when the tab bar is showing
pub fn tab_at<P>(area: Rect, tabs: &Tabs<P>, column: u16, row: u16) -> Option<usize> {
    if tabs.is_empty() {
        return None;
    }
    let bar = create_layout(area, tabs.headers_visible()).tab_bar?;
    header_areas(tabs.headers(), bar).iter().position(|rect| {
        rect.width > 0
            && row == rect.y
            && column >= rect.x
            && column < rect.x + rect.width
    })
}

/// Draw the tab headers
pub fn draw_tab_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();
    for (idx, header) in app.state.tabs.headers().iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
        }
        let style = if header.active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", header.name), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.state.contact.state();
    let indicator_color = match state {
        SubmissionState::Success => Color::Green,
        SubmissionState::Failure => Color::Red,
        SubmissionState::Submitting | SubmissionState::Validating => Color::Yellow,
        SubmissionState::Idle => Color::Gray,
    };

    let mut spans = vec![
        Span::styled(" ● ", Style::default().fg(indicator_color)),
        Span::styled(
            format!("{}  ", state.label()),
            Style::default().fg(indicator_color),
        ),
        Span::styled(get_hints(app), Style::default().fg(Color::Gray)),
    ];

    if let Some(msg) = &app.status_message {
        let color = if state == SubmissionState::Failure {
            Color::Red
        } else {
            Color::Green
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(color)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        width: (quit_hint.len() as u16).min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for whatever currently takes input
fn get_hints(app: &App) -> String {
    if !app.state.tabs.headers_visible() {
        return format!("Tab:next  {SEND_SHORTCUT}:send  ↑/↓:scroll  {TABS_SHORTCUT}:tabs");
    }

    let contact = &app.state.contact;
    match app.state.active_pane() {
        Pane::Contact if contact.is_success_visible() => "n:new message".to_string(),
        Pane::Contact if app.submission_in_flight() => "please wait".to_string(),
        Pane::Contact => match contact.focus() {
            ContactFocus::Field(_) => format!("Tab:next  {SEND_SHORTCUT}:send  F1-F3:tab"),
            ContactFocus::MarketingConsent => {
                format!("Space:toggle  {}", contact.marketing_consent.title)
            }
            ContactFocus::GdprConsent => {
                format!("Space:toggle  {}", contact.gdpr_consent.title)
            }
            ContactFocus::Submit if contact.submit_button.is_enabled() => {
                format!("Enter:{}", contact.submit_button.title)
            }
            ContactFocus::Submit => "accept the privacy policy to send".to_string(),
        },
        Pane::About => "j/k:scroll  h/l:tab".to_string(),
        Pane::Settings => "w:save  j/k:scroll  h/l:tab".to_string(),
    }
}
