//! Contact form: fields, consent controls and the submission controller

use super::action::{Button, CheckBox};
use super::field::FormField;
use crate::client::SubmitError;
use crate::state::{LoaderState, SubmissionPayload, SubmissionResult, SubmissionState};
use crate::strings;
use chrono::{DateTime, Local};

/// Trait for common form focus operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// What currently holds keyboard focus on the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactFocus {
    Field(usize),
    MarketingConsent,
    GdprConsent,
    Submit,
}

/// The contact form and its submission controller
#[derive(Debug)]
pub struct ContactForm {
    pub fields: Vec<FormField>,
    pub marketing_consent: CheckBox,
    pub gdpr_consent: CheckBox,
    pub submit_button: Button,
    state: SubmissionState,
    active_index: usize,
    loader: Option<LoaderState>,
    /// When the last attempt reached Success or Failure
    pub completed_at: Option<DateTime<Local>>,
    /// Why the last attempt failed, for the status bar
    pub last_error: Option<String>,
}

impl ContactForm {
    pub fn new() -> Self {
        let mut name = FormField::short_text("Name", "name-field");
        name.add_required();
        let mut email = FormField::email("email-field");
        email.add_required();
        let mut message = FormField::multi_line("Message", "message-field");
        message.add_required();

        let mut submit_button = Button::new("Submit", "Submit");
        // Stays disabled until the privacy policy is accepted
        submit_button.disable();

        Self {
            fields: vec![name, email, message],
            marketing_consent: CheckBox::new(
                strings::FORM_MARKETING_CONSENT,
                "Marketing Consent",
                false,
            ),
            gdpr_consent: CheckBox::new(strings::FORM_GDPR_CONSENT, "Privacy Policy", true),
            submit_button,
            state: SubmissionState::Idle,
            active_index: 0,
            loader: None,
            completed_at: None,
            last_error: None,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn loader(&self) -> Option<&LoaderState> {
        self.loader.as_ref()
    }

    pub fn update_loader(&mut self) {
        if let Some(loader) = self.loader.as_mut() {
            loader.update();
        }
    }

    pub fn focus(&self) -> ContactFocus {
        let field_count = self.fields.len();
        match self.active_index {
            i if i < field_count => ContactFocus::Field(i),
            i if i == field_count => ContactFocus::MarketingConsent,
            i if i == field_count + 1 => ContactFocus::GdprConsent,
            _ => ContactFocus::Submit,
        }
    }

    pub fn active_text_field_mut(&mut self) -> Option<&mut FormField> {
        match self.focus() {
            ContactFocus::Field(i) => self.fields.get_mut(i),
            _ => None,
        }
    }

    /// The form accepts input only when it is on screen
    pub fn is_form_visible(&self) -> bool {
        matches!(
            self.state,
            SubmissionState::Idle | SubmissionState::Validating | SubmissionState::Failure
        )
    }

    pub fn is_loader_visible(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn is_success_visible(&self) -> bool {
        self.state == SubmissionState::Success
    }

    pub fn is_failure_visible(&self) -> bool {
        self.state == SubmissionState::Failure
    }

    /// Flip the optional marketing consent
    pub fn toggle_marketing(&mut self) {
        if self.is_form_visible() {
            self.marketing_consent.toggle();
        }
    }

    /// Flip the required consent and gate the submit button on it
    pub fn toggle_gdpr(&mut self) {
        if !self.is_form_visible() || !self.gdpr_consent.toggle() {
            return;
        }
        if self.gdpr_consent.checked() {
            self.submit_button.enable();
        } else {
            self.submit_button.disable();
        }
    }

    /// Submit is possible when the button is enabled and nothing is in flight
    pub fn can_submit(&self) -> bool {
        self.submit_button.is_enabled() && self.is_form_visible()
    }

    /// Validate every field and, if all pass, move to `Submitting`.
    ///
    /// Returns the payload for exactly one network call, or `None` when the
    /// attempt stops before the network.
    pub fn begin_submission(&mut self) -> Option<SubmissionPayload> {
        if !self.can_submit() {
            tracing::debug!(state = self.state.label(), "submit ignored");
            return None;
        }

        self.state = SubmissionState::Validating;
        self.last_error = None;

        let mut payload = SubmissionPayload::default();
        let mut all_pass = true;
        for field in &mut self.fields {
            field.reset();
            if field.validate() {
                payload
                    .fields
                    .insert(field.name.clone(), field.get_val().to_string());
            } else {
                tracing::debug!(field = %field.id, "field failed validation");
                all_pass = false;
                field.add_error();
            }
        }

        if !all_pass || !self.gdpr_consent.checked() {
            tracing::info!(
                fields_valid = all_pass,
                consent = self.gdpr_consent.checked(),
                "contact form not submitted"
            );
            self.state = SubmissionState::Idle;
            return None;
        }

        payload.gdpr_consent = self.gdpr_consent.checked();
        payload.marketing_consent = self.marketing_consent.checked();

        self.state = SubmissionState::Submitting;
        self.loader = Some(LoaderState::new());
        self.set_consents_enabled(false);
        Some(payload)
    }

    /// Resolve the in-flight attempt into `Success` or `Failure`
    pub fn complete_submission(&mut self, outcome: Result<SubmissionResult, SubmitError>) {
        if self.state != SubmissionState::Submitting {
            tracing::warn!(state = self.state.label(), "submission result without request");
            return;
        }

        self.state = match outcome {
            Ok(SubmissionResult { success: true }) => {
                tracing::info!("contact form sent");
                SubmissionState::Success
            }
            Ok(SubmissionResult { success: false }) => {
                tracing::warn!("server declined contact form");
                self.last_error = Some("server declined the message".to_string());
                SubmissionState::Failure
            }
            Err(err) => {
                tracing::warn!(error = %err, "contact form submission failed");
                self.last_error = Some(err.to_string());
                SubmissionState::Failure
            }
        };

        for field in &mut self.fields {
            field.reset();
        }
        self.loader = None;
        self.set_consents_enabled(true);
        self.completed_at = Some(Local::now());
    }

    fn set_consents_enabled(&mut self, enabled: bool) {
        for checkbox in [&mut self.marketing_consent, &mut self.gdpr_consent] {
            if enabled {
                checkbox.enable();
            } else {
                checkbox.disable();
            }
        }
    }

    /// Leave the success screen with an empty form
    pub fn start_new_message(&mut self) {
        if self.state != SubmissionState::Success {
            return;
        }
        for field in &mut self.fields {
            field.clear();
            field.reset();
        }
        self.marketing_consent.uncheck();
        self.gdpr_consent.uncheck();
        self.submit_button.disable();
        self.active_index = 0;
        self.last_error = None;
        self.state = SubmissionState::Idle;
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        self.fields.len() + 3 // fields, two consents, submit
    }
    fn active_field(&self) -> usize {
        self.active_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_index = index.min(self.field_count() - 1);
    }
}
