//! Form field value objects and their validation rules

use crate::strings;
use regex::Regex;
use std::sync::LazyLock;

/// Email shape: word runs separated by single `.` or `-`, an `@`, then a
/// domain ending in one or more 2-3 letter labels.
static EMAIL_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^(?-u:\w)+([.-]?(?-u:\w)+)*@(?-u:\w)+([.-]?(?-u:\w)+)*(\.(?-u:\w){2,3})+$")
        .map_err(|err| tracing::error!(error = %err, "email pattern failed to compile"))
        .ok()
});

/// The validation rule a field is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single line, must be non-empty
    ShortText,
    /// Single line, must look like an email address
    Email,
    /// Multi-line, must be non-empty
    MultiLine,
}

impl FieldKind {
    /// Check `value` against this kind's rule
    pub fn validate(self, value: &str) -> bool {
        match self {
            FieldKind::ShortText | FieldKind::MultiLine => is_non_empty(value),
            FieldKind::Email => is_email(value),
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, FieldKind::MultiLine)
    }
}

pub fn is_non_empty(value: &str) -> bool {
    !value.is_empty()
}

pub fn is_email(value: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(value))
}

/// Represents a single form input with its rule and display state
#[derive(Debug, Clone)]
pub struct FormField {
    /// Key used in the submission payload
    pub name: String,
    pub id: String,
    pub label: String,
    pub kind: FieldKind,
    value: String,
    has_error: bool,
    required: bool,
}

impl FormField {
    fn new(kind: FieldKind, name: &str, id: &str) -> Self {
        Self {
            name: name.to_string(),
            id: id.to_string(),
            label: name.to_string(),
            kind,
            value: String::new(),
            has_error: false,
            required: false,
        }
    }

    /// Create a single-line text field
    pub fn short_text(name: &str, id: &str) -> Self {
        Self::new(FieldKind::ShortText, name, id)
    }

    /// Create an email field (always named "Email")
    pub fn email(id: &str) -> Self {
        Self::new(FieldKind::Email, "Email", id)
    }

    /// Create a multi-line text area
    pub fn multi_line(name: &str, id: &str) -> Self {
        Self::new(FieldKind::MultiLine, name, id)
    }

    pub fn validate(&self) -> bool {
        self.kind.validate(&self.value)
    }

    pub fn get_val(&self) -> &str {
        &self.value
    }

    /// Clear the error display state. The value is kept.
    pub fn reset(&mut self) {
        self.has_error = false;
    }

    pub fn add_error(&mut self) {
        self.has_error = true;
    }

    pub fn add_required(&mut self) {
        self.required = true;
    }

    pub fn has_error(&self) -> bool {
        self.has_error
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_multiline(&self) -> bool {
        self.kind.is_multiline()
    }

    pub fn error_text(&self) -> &'static str {
        match self.kind {
            FieldKind::ShortText => strings::FORM_NAME_ERROR_TEXT,
            FieldKind::Email => strings::FORM_EMAIL_ERROR_TEXT,
            FieldKind::MultiLine => strings::FORM_MESSAGE_ERROR_TEXT,
        }
    }

    /// Label with a required marker when applicable
    pub fn display_label(&self) -> String {
        if self.is_required() {
            format!("{} *", self.label)
        } else {
            self.label.clone()
        }
    }

    #[cfg(test)]
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Insert a line break; ignored by single-line fields
    pub fn push_newline(&mut self) {
        if self.is_multiline() {
            self.value.push('\n');
        }
    }

    /// Append pasted text; single-line fields get spaces for line breaks
    pub fn push_str(&mut self, text: &str) {
        if self.is_multiline() {
            self.value.push_str(&text.replace("\r\n", "\n"));
        } else {
            let flat = text.replace("\r\n", " ").replace(['\n', '\r'], " ");
            self.value.push_str(&flat);
        }
    }

    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}
