//! Loading ring shown while the contact form is being sent

use crate::state::{LoaderState, RING_SEGMENTS};
use crate::strings;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Arc glyphs, clockwise from the top-left quadrant
const ARCS: [&str; RING_SEGMENTS] = ["◜", "◝", "◞", "◟"];

/// Two-row ring with the leading arc highlighted
fn ring_lines(lead: usize) -> Vec<Line<'static>> {
    let arc = |i: usize| {
        let style = if i == lead {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(ARCS[i], style)
    };
    vec![
        Line::from(vec![arc(0), arc(1)]),
        Line::from(vec![arc(3), arc(2)]),
    ]
}

/// Draw the ring and caption centered in `area`
pub fn draw(frame: &mut Frame, area: Rect, loader: &LoaderState) {
    let mut lines = ring_lines(loader.lead_segment());
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        strings::FORM_SENDING,
        Style::default().fg(Color::Gray),
    )));

    let height = (lines.len() as u16).min(area.height);
    let ring_area = Rect {
        x: area.x,
        y: area.y + (area.height - height) / 2,
        width: area.width,
        height,
    };
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        ring_area,
    );
}
