//! User-facing copy for the contact form

pub const FORM_NAME_ERROR_TEXT: &str = "Please tell us your name";
pub const FORM_EMAIL_ERROR_TEXT: &str = "Please enter a valid email address";
pub const FORM_MESSAGE_ERROR_TEXT: &str = "Please write a message";

pub const FORM_SUCCESS: &str =
    "Thanks for getting in touch! Your message has been sent and we will reply soon.";
pub const FORM_FAIL: &str =
    "Sorry, your message could not be sent. Please check the form and try again.";

pub const FORM_PRIVACY_POLICY: &str = "We only use your details to answer your message. \
     See the privacy policy for how your data is stored and processed.";
pub const FORM_MARKETING_CONSENT: &str = "I would like to receive news and product updates";
pub const FORM_GDPR_CONSENT: &str = "I agree to the privacy policy";

pub const FORM_SENDING: &str = "Sending your message...";
