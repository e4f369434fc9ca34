//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field needs: borders plus its content lines
pub fn field_height(field: &FormField) -> u16 {
    if field.is_multiline() {
        7
    } else {
        3
    }
}

/// Draw a form field, marking it red with its error text when invalid
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let accent = if field.has_error() {
        Color::Red
    } else if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let value_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    let cursor = if is_active { "▌" } else { "" };
    let cursor_style = Style::default().fg(Color::Cyan);

    let value = field.get_val();
    let content = if field.is_multiline() {
        let mut lines: Vec<Line> = value
            .split('\n')
            .map(|l| Line::from(Span::styled(l, value_style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(Span::styled(cursor, cursor_style));
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(value, value_style),
            Span::styled(cursor, cursor_style),
        ]))
    };

    let mut block = Block::default()
        .title(format!(" {} ", field.display_label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    if field.has_error() {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {} ", field.error_text()),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered(field: &FormField, height: u16) -> String {
        let backend = TestBackend::new(50, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw_field(frame, frame.area(), field, false))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(50)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_error_text_shown_only_with_error() {
        let mut field = FormField::email("contact-email");
        field.set_value("nope");
        assert!(!rendered(&field, 3).contains(field.error_text()));

        field.add_error();
        assert!(rendered(&field, 3).contains(field.error_text()));
    }

    #[test]
    fn test_required_marker_in_title() {
        let mut field = FormField::short_text("Name", "contact-name");
        field.add_required();
        assert!(rendered(&field, 3).contains("Name *"));
    }

    #[test]
    fn test_multiline_height() {
        assert_eq!(field_height(&FormField::multi_line("Message", "m")), 7);
        assert_eq!(field_height(&FormField::short_text("Name", "n")), 3);
    }
}
