//! Form domain layer
//!
//! Field values and validation rules, the actionable items (buttons and
//! checkboxes) and the contact form's submission controller.

mod action;
mod contact_form;
mod field;

pub use action::{ActionState, Button, CheckBox};
pub use contact_form::{ContactFocus, ContactForm, Form};
pub use field::FormField;
