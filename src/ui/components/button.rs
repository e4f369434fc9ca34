//! Button and checkbox components for TUI

use crate::state::{ActionState, Button, CheckBox};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a bordered button
pub fn render_button(frame: &mut Frame, area: Rect, button: &Button, is_selected: bool) {
    let is_enabled = button.action_state() == ActionState::Enabled;

    let border_style = match (is_selected, is_enabled) {
        (true, true) => Style::default().fg(Color::Cyan),
        (true, false) => Style::default().fg(Color::Gray),
        _ => Style::default().fg(Color::DarkGray),
    };

    let text_style = if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(format!(" {} ", button.label)).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Build a one-line checkbox: `[x] label`
pub fn checkbox_line<'a>(checkbox: &'a CheckBox, is_selected: bool) -> Line<'a> {
    let mark = if checkbox.checked() { "[x]" } else { "[ ]" };

    let mark_style = if checkbox.action_state() == ActionState::Disabled {
        Style::default().fg(Color::DarkGray)
    } else if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut spans = vec![
        Span::styled(mark, mark_style),
        Span::raw(" "),
        Span::styled(
            checkbox.label.as_str(),
            if is_selected {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            },
        ),
    ];
    if checkbox.required {
        spans.push(Span::styled(" *", Style::default().fg(Color::Red)));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_checkbox_line_reflects_checked_state() {
        let mut checkbox = CheckBox::new("Agree", "Agree", false);
        assert_eq!(text(&checkbox_line(&checkbox, false)), "[ ] Agree");
        checkbox.toggle();
        assert_eq!(text(&checkbox_line(&checkbox, false)), "[x] Agree");
    }

    #[test]
    fn test_required_checkbox_has_marker() {
        let checkbox = CheckBox::new("Privacy", "Privacy", true);
        assert_eq!(text(&checkbox_line(&checkbox, true)), "[ ] Privacy *");
    }
}
