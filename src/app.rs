//! Application state and core logic

use crate::client::{ContactClientTrait, SubmitError};
use crate::config::ContactConfig;
use crate::state::{
    AppState, ContactFocus, Form, Pane, SubmissionPayload, SubmissionResult, SubmissionState,
};
use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use std::sync::Arc;
use tokio::sync::oneshot::{self, error::TryRecvError};

type SubmissionOutcome = Result<SubmissionResult, SubmitError>;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Loaded user configuration
    pub config: ContactConfig,
    /// Resolved contact endpoint, for display
    pub endpoint: String,
    /// Backend client shared with in-flight request tasks
    client: Arc<dyn ContactClientTrait>,
    /// Result channel of the request currently in flight
    pending: Option<oneshot::Receiver<SubmissionOutcome>>,
    /// Whether the app should quit
    quit: bool,
    /// Transient feedback shown in the status bar
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(
        config: ContactConfig,
        client: Arc<dyn ContactClientTrait>,
        endpoint: String,
    ) -> Self {
        let mut state = AppState::default();
        if !config.show_tabs() {
            state.tabs.show(false);
        }

        Self {
            state,
            config,
            endpoint,
            client,
            pending: None,
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Whether the loader animation needs fast redraws
    pub fn is_animating(&self) -> bool {
        self.state.contact.state().is_in_flight()
    }

    pub fn submission_in_flight(&self) -> bool {
        self.pending.is_some()
    }

    /// Per-frame housekeeping: loader animation and request completion
    pub fn tick(&mut self) {
        self.state.contact.update_loader();
        self.poll_submission();
    }

    /// Apply the in-flight request's result once it is available
    pub fn poll_submission(&mut self) {
        let Some(receiver) = self.pending.as_mut() else {
            return;
        };
        let outcome = match receiver.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Closed) => Err(SubmitError::Interrupted),
        };
        self.pending = None;
        self.state.contact.complete_submission(outcome);

        self.status_message = match self.state.contact.state() {
            SubmissionState::Success => Some("Message sent".to_string()),
            SubmissionState::Failure => self
                .state
                .contact
                .last_error
                .as_ref()
                .map(|reason| format!("Not sent: {reason}")),
            _ => None,
        };
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        if key.code == KeyCode::Char('t')
            && (key.modifiers.contains(KeyModifiers::CONTROL)
                || key.modifiers.contains(crate::platform::SEND_MODIFIER))
        {
            self.toggle_tabs();
            return;
        }

        // Expanded view: every pane on screen, tab switching is off and
        // the form keeps focus; arrows scroll
        if !self.state.tabs.headers_visible() {
            self.status_message = None;
            match key.code {
                KeyCode::Up | KeyCode::Down => self.handle_scroll_key(key),
                _ => self.handle_contact_key(key),
            }
            return;
        }

        // Tab switching works from any pane
        match key.code {
            KeyCode::F(n) if n >= 1 => {
                self.state.select_tab(usize::from(n - 1));
                return;
            }
            KeyCode::Right if key.modifiers.contains(KeyModifiers::ALT) => {
                self.state.next_tab();
                return;
            }
            KeyCode::Left if key.modifiers.contains(KeyModifiers::ALT) => {
                self.state.prev_tab();
                return;
            }
            _ => {}
        }

        self.status_message = None;

        match self.state.active_pane() {
            Pane::Contact => self.handle_contact_key(key),
            Pane::About => self.handle_read_only_key(key),
            Pane::Settings => self.handle_settings_key(key),
        }
    }

    /// Append pasted text to the focused contact field
    pub fn handle_paste(&mut self, text: &str) {
        if self.state.has_errors()
            || (self.state.tabs.headers_visible() && self.state.active_pane() != Pane::Contact)
            || !self.state.contact.is_form_visible()
        {
            return;
        }
        if let Some(field) = self.state.contact.active_text_field_mut() {
            field.push_str(text);
        }
    }

    /// Handle a mouse event; a left click on a tab header selects it
    pub fn handle_mouse(&mut self, mouse: MouseEvent, screen: Rect) {
        if self.state.has_errors() {
            return;
        }
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            let tabs = &self.state.tabs;
            if let Some(index) = crate::ui::tab_at(screen, tabs, mouse.column, mouse.row) {
                self.state.select_tab(index);
            }
        }
    }

    /// Collapse the tab headers into the expanded view, or restore them
    pub fn toggle_tabs(&mut self) {
        let show = !self.state.tabs.headers_visible();
        self.state.tabs.show(show);
        self.config.show_tabs = Some(show);
        tracing::debug!(show, "tab headers toggled");
    }

    /// Handle keys on the contact form
    fn handle_contact_key(&mut self, key: KeyEvent) {
        let contact = &mut self.state.contact;

        if contact.is_success_visible() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char('n')) {
                contact.start_new_message();
            }
            return;
        }

        // Inputs stay inert while the request is in flight
        if contact.is_loader_visible() {
            return;
        }

        match key.code {
            KeyCode::Tab => contact.next_field(),
            KeyCode::BackTab => contact.prev_field(),
            KeyCode::Char('s')
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    || key.modifiers.contains(crate::platform::SEND_MODIFIER) =>
            {
                self.submit();
            }
            _ => match contact.focus() {
                ContactFocus::Field(_) => self.handle_field_key(key),
                ContactFocus::MarketingConsent => {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                        self.state.contact.toggle_marketing();
                    }
                }
                ContactFocus::GdprConsent => {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                        self.state.contact.toggle_gdpr();
                    }
                }
                ContactFocus::Submit => {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                        self.submit();
                    }
                }
            },
        }
    }

    /// Text input into the focused field
    fn handle_field_key(&mut self, key: KeyEvent) {
        let contact = &mut self.state.contact;
        let Some(field) = contact.active_text_field_mut() else {
            return;
        };
        let advance = match key.code {
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => false,
            KeyCode::Char(c) => {
                field.push_char(c);
                false
            }
            KeyCode::Backspace => {
                field.pop_char();
                false
            }
            KeyCode::Enter if field.is_multiline() => {
                field.push_newline();
                false
            }
            KeyCode::Enter => true,
            _ => false,
        };
        if advance {
            contact.next_field();
        }
    }

    /// Start a submission attempt and hand the request to the runtime
    pub fn submit(&mut self) {
        if !self.state.contact.submit_button.is_enabled() {
            self.status_message = Some("Accept the privacy policy to send".to_string());
            return;
        }

        match self.state.contact.begin_submission() {
            Some(payload) => self.dispatch(payload),
            None if self.state.contact.state() == SubmissionState::Idle => {
                self.status_message = Some("Please fix the highlighted fields".to_string());
            }
            None => {}
        }
    }

    fn dispatch(&mut self, payload: SubmissionPayload) {
        let client = Arc::clone(&self.client);
        let (sender, receiver) = oneshot::channel();
        tokio::spawn(async move {
            let outcome = client.submit_contact(&payload).await;
            // A dropped receiver means the app quit mid-request
            let _ = sender.send(outcome);
        });
        self.pending = Some(receiver);
    }

    fn handle_scroll_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.state.scroll_down(),
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_up(),
            _ => {}
        }
    }

    /// Handle keys in panes without inputs
    fn handle_read_only_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Right | KeyCode::Char('l') => self.state.next_tab(),
            KeyCode::Left | KeyCode::Char('h') => self.state.prev_tab(),
            _ => self.handle_scroll_key(key),
        }
    }

    /// Handle keys in the Settings pane
    fn handle_settings_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('w') {
            self.save_config();
        } else {
            self.handle_read_only_key(key);
        }
    }

    fn save_config(&mut self) {
        match self.config.save() {
            Ok(()) => {
                let location = ContactConfig::config_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "config directory".to_string());
                self.status_message = Some(format!("Settings saved to {location}"));
            }
            Err(err) => self.push_error(format!("Failed to save settings: {err:#}")),
        }
    }
}
