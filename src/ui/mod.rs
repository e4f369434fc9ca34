//! UI module for rendering the TUI

mod about;
mod components;
mod config_panel;
mod contact;
mod forms;
mod layout;
mod loader;

pub use layout::tab_at;

use crate::app::App;
use crate::state::Pane;
use components::render_error_dialog;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let tabs = &app.state.tabs;
    let regions = layout::create_layout(frame.area(), tabs.headers_visible());

    if let Some(bar) = regions.tab_bar.filter(|_| tabs.is_rendered()) {
        layout::draw_tab_bar(frame, bar, app);
    }

    // One pane normally; every pane stacked in the expanded view
    let panes: Vec<Pane> = tabs.visible_panes().copied().collect();
    let count = panes.len().max(1) as u32;
    let areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(panes.iter().map(|_| Constraint::Ratio(1, count)))
        .split(regions.content);
    for (pane, area) in panes.iter().zip(areas.iter()) {
        draw_pane(frame, *area, *pane, app);
    }

    layout::draw_status_bar(frame, regions.status, app);

    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error, app.state.queued_errors());
    }
}

fn draw_pane(frame: &mut Frame, area: Rect, pane: Pane, app: &App) {
    match pane {
        Pane::Contact => contact::draw(frame, area, app),
        Pane::About => about::draw(frame, area, app),
        Pane::Settings => config_panel::draw(frame, area, app),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockContactClientTrait;
    use crate::config::ContactConfig;
    use crate::state::{SubmissionResult, SubmissionState};
    use crate::strings;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    const WIDTH: u16 = 100;
    const HEIGHT: u16 = 40;

    fn test_app() -> App {
        App::new(
            ContactConfig::default(),
            Arc::new(MockContactClientTrait::new()),
            "http://127.0.0.1:5000/contact_form/".to_string(),
        )
    }

    fn render(app: &App) -> String {
        let backend = TestBackend::new(WIDTH, HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(WIDTH as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn fill_and_accept(app: &mut App) {
        let contact = &mut app.state.contact;
        contact.fields[0].set_value("Ada");
        contact.fields[1].set_value("ada@example.com");
        contact.fields[2].set_value("Hello");
        contact.toggle_gdpr();
    }

    #[test]
    fn test_initial_screen_shows_contact_form() {
        let screen = render(&test_app());
        assert!(screen.contains(" Contact "));
        assert!(screen.contains("Name *"));
        assert!(screen.contains("Email *"));
        assert!(screen.contains("Message *"));
        assert!(screen.contains("[ ] I agree to the privacy policy"));
        assert!(screen.contains("Submit"));
        assert!(!screen.contains("Contact Settings"));
        assert!(screen.contains("ready"));
    }

    #[test]
    fn test_success_replaces_form() {
        let mut app = test_app();
        fill_and_accept(&mut app);
        app.state.contact.begin_submission().unwrap();
        app.state
            .contact
            .complete_submission(Ok(SubmissionResult { success: true }));

        let screen = render(&app);
        assert!(screen.contains("Thanks for getting in touch!"));
        assert!(!screen.contains("Sorry, your message could not be sent."));
        assert!(!screen.contains("Name *"));
    }

    #[test]
    fn test_failure_keeps_form_and_shows_banner() {
        let mut app = test_app();
        fill_and_accept(&mut app);
        app.state.contact.begin_submission().unwrap();
        app.state
            .contact
            .complete_submission(Ok(SubmissionResult { success: false }));

        let screen = render(&app);
        assert_eq!(app.state.contact.state(), SubmissionState::Failure);
        assert!(screen.contains("Sorry, your message could not be sent."));
        assert!(screen.contains("Name *"));
        assert!(!screen.contains("Thanks for getting in touch!"));
    }

    #[test]
    fn test_submitting_shows_loader_instead_of_form() {
        let mut app = test_app();
        fill_and_accept(&mut app);
        app.state.contact.begin_submission().unwrap();

        let screen = render(&app);
        assert!(screen.contains(strings::FORM_SENDING));
        assert!(!screen.contains("Name *"));
    }

    #[test]
    fn test_invalid_field_shows_error_text() {
        let mut app = test_app();
        app.state.contact.toggle_gdpr();
        app.state.contact.fields[0].set_value("Ada");
        app.state.contact.fields[2].set_value("Hello");
        assert!(app.state.contact.begin_submission().is_none());

        let screen = render(&app);
        assert!(screen.contains(strings::FORM_EMAIL_ERROR_TEXT));
        assert!(!screen.contains(strings::FORM_NAME_ERROR_TEXT));
    }

    #[test]
    fn test_selected_tab_replaces_content() {
        let mut app = test_app();
        app.state.select_tab(2);
        let screen = render(&app);
        assert!(screen.contains("Contact Settings"));
        assert!(!screen.contains("Name *"));
    }

    #[test]
    fn test_expanded_view_shows_every_pane() {
        let mut app = test_app();
        app.toggle_tabs();
        let screen = render(&app);
        assert!(screen.contains(" Contact "));
        assert!(screen.contains(" About "));
        assert!(screen.contains(" Settings "));
    }

    #[test]
    fn test_error_dialog_overlays_screen() {
        let mut app = test_app();
        app.push_error("Failed to load config");
        let screen = render(&app);
        assert!(screen.contains("Failed to load config"));
        assert!(screen.contains("Press Enter or Esc to dismiss"));
    }
}
