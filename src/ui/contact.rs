//! Contact pane: the form, the loading ring, or the outcome message

use super::components::{checkbox_line, render_button, BUTTON_HEIGHT};
use super::forms::{draw_field, field_height};
use super::loader;
use crate::app::App;
use crate::state::{ContactFocus, ContactForm};
use crate::strings;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Width of the submit button box
const SUBMIT_WIDTH: u16 = 14;

/// Draw the contact pane
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let contact = &app.state.contact;

    let block = Block::default()
        .title(" Contact ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if contact.is_success_visible() {
        draw_success(frame, inner, contact);
    } else if let Some(ring) = contact.loader().filter(|_| contact.is_loader_visible()) {
        loader::draw(frame, inner, ring);
    } else {
        draw_form(frame, inner, contact);
    }
}

fn draw_form(frame: &mut Frame, area: Rect, contact: &ContactForm) {
    let focus = contact.focus();

    let mut constraints = Vec::new();
    if contact.is_failure_visible() {
        constraints.push(Constraint::Length(3));
    }
    constraints.extend(
        contact
            .fields
            .iter()
            .map(|f| Constraint::Length(field_height(f))),
    );
    constraints.extend([
        Constraint::Length(3), // Privacy notice
        Constraint::Length(1), // Marketing consent
        Constraint::Length(1), // Privacy consent
        Constraint::Length(1), // Spacer
        Constraint::Length(BUTTON_HEIGHT),
        Constraint::Min(0),
    ]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);
    let mut rows = chunks.iter().copied();

    if contact.is_failure_visible() {
        if let Some(row) = rows.next() {
            draw_failure_banner(frame, row, contact);
        }
    }

    for (idx, field) in contact.fields.iter().enumerate() {
        if let Some(row) = rows.next() {
            draw_field(frame, row, field, focus == ContactFocus::Field(idx));
        }
    }

    let (Some(notice), Some(marketing), Some(gdpr), Some(_), Some(submit)) =
        (rows.next(), rows.next(), rows.next(), rows.next(), rows.next())
    else {
        return;
    };

    frame.render_widget(
        Paragraph::new(Span::styled(
            strings::FORM_PRIVACY_POLICY,
            Style::default().fg(Color::DarkGray),
        ))
        .wrap(Wrap { trim: true }),
        notice,
    );
    frame.render_widget(
        Paragraph::new(checkbox_line(
            &contact.marketing_consent,
            focus == ContactFocus::MarketingConsent,
        )),
        marketing,
    );
    frame.render_widget(
        Paragraph::new(checkbox_line(
            &contact.gdpr_consent,
            focus == ContactFocus::GdprConsent,
        )),
        gdpr,
    );

    let button_area = Rect {
        width: SUBMIT_WIDTH.min(submit.width),
        ..submit
    };
    render_button(
        frame,
        button_area,
        &contact.submit_button,
        focus == ContactFocus::Submit,
    );
}

fn draw_failure_banner(frame: &mut Frame, area: Rect, contact: &ContactForm) {
    let mut lines = vec![Line::from(Span::styled(
        strings::FORM_FAIL,
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    ))];
    if let Some(reason) = &contact.last_error {
        lines.push(Line::from(Span::styled(
            format!("({reason})"),
            Style::default().fg(Color::DarkGray),
        )));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn draw_success(frame: &mut Frame, area: Rect, contact: &ContactForm) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            strings::FORM_SUCCESS,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    if let Some(at) = contact.completed_at {
        lines.push(Line::from(Span::styled(
            format!("Sent at {}", at.format("%H:%M")),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("Press "),
        Span::styled("n", Style::default().fg(Color::Cyan)),
        Span::raw(" to write another message"),
    ]));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}
