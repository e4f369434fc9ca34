//! Actionable items: buttons and checkboxes

use uuid::Uuid;

/// Whether an actionable item responds to input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionState {
    Disabled,
    #[default]
    Enabled,
}

/// A push button
#[derive(Debug, Clone)]
pub struct Button {
    pub label: String,
    /// Tooltip-style description shown in the status bar
    pub title: String,
    state: ActionState,
}

impl Button {
    pub fn new(title: &str, label: &str) -> Self {
        Self {
            label: label.to_string(),
            title: title.to_string(),
            state: ActionState::Enabled,
        }
    }

    pub fn action_state(&self) -> ActionState {
        self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.state == ActionState::Enabled
    }

    pub fn enable(&mut self) {
        self.state = ActionState::Enabled;
    }

    pub fn disable(&mut self) {
        self.state = ActionState::Disabled;
    }
}

/// A labelled checkbox
#[derive(Debug, Clone)]
pub struct CheckBox {
    pub id: Uuid,
    pub label: String,
    pub title: String,
    /// Rendered with a required marker
    pub required: bool,
    checked: bool,
    state: ActionState,
}

impl CheckBox {
    pub fn new(label: &str, title: &str, required: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.to_string(),
            title: title.to_string(),
            required,
            checked: false,
            state: ActionState::Enabled,
        }
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    /// Flip the checkbox. Returns false when disabled and nothing changed.
    pub fn toggle(&mut self) -> bool {
        if self.state == ActionState::Disabled {
            return false;
        }
        self.checked = !self.checked;
        tracing::debug!(
            checkbox = %self.id,
            title = %self.title,
            checked = self.checked,
            "checkbox toggled"
        );
        true
    }

    pub fn uncheck(&mut self) {
        self.checked = false;
    }

    pub fn action_state(&self) -> ActionState {
        self.state
    }

    pub fn enable(&mut self) {
        self.state = ActionState::Enabled;
    }

    pub fn disable(&mut self) {
        self.state = ActionState::Disabled;
    }
}
