//! Application state definitions

use super::forms::ContactForm;
use super::tabs::Tabs;
use std::collections::VecDeque;

/// Content shown inside a tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Contact,
    About,
    Settings,
}

impl Pane {
    pub fn title(&self) -> &'static str {
        match self {
            Pane::Contact => "Contact",
            Pane::About => "About",
            Pane::Settings => "Settings",
        }
    }
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    pub tabs: Tabs<Pane>,
    pub contact: ContactForm,
    /// Scroll position in read-only panes
    pub scroll_offset: usize,
    /// Queued error messages, shown one at a time in a modal dialog
    errors: VecDeque<String>,
}

impl Default for AppState {
    fn default() -> Self {
        let mut tabs = Tabs::new();
        for pane in [Pane::Contact, Pane::About, Pane::Settings] {
            tabs.add_tab(pane.title(), pane);
        }
        tabs.render();

        Self {
            tabs,
            contact: ContactForm::new(),
            scroll_offset: 0,
            errors: VecDeque::new(),
        }
    }
}

impl AppState {
    pub fn active_pane(&self) -> Pane {
        self.tabs.active_pane().copied().unwrap_or(Pane::Contact)
    }

    pub fn select_tab(&mut self, index: usize) {
        if self.tabs.select(index) {
            self.scroll_offset = 0;
        }
    }

    pub fn next_tab(&mut self) {
        if self.tabs.next() {
            self.scroll_offset = 0;
        }
    }

    pub fn prev_tab(&mut self) {
        if self.tabs.prev() {
            self.scroll_offset = 0;
        }
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn push_error(&mut self, message: String) {
        tracing::warn!(%message, "error queued for display");
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn queued_errors(&self) -> usize {
        self.errors.len()
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}
