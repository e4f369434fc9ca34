//! Submission payload, server result and controller phases

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Phase of the contact form's submission controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
    Failure,
}

impl SubmissionState {
    /// True while a request is out and the submit control must stay inert
    pub fn is_in_flight(self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "ready",
            Self::Validating => "validating",
            Self::Submitting => "sending",
            Self::Success => "sent",
            Self::Failure => "failed",
        }
    }
}

/// Request body for `POST <server>/contact_form/`.
///
/// Field values are keyed by field name (`Name`, `Email`, `Message`) and
/// flattened next to the consent flags.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SubmissionPayload {
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
    #[serde(rename = "GDPRConsent")]
    pub gdpr_consent: bool,
    #[serde(rename = "MarketingConsent")]
    pub marketing_consent: bool,
}

/// Response body. A missing `success` key counts as a failed submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubmissionResult {
    #[serde(default)]
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_payload_wire_shape() {
        let mut fields = BTreeMap::new();
        fields.insert("Name".to_string(), "Ada".to_string());
        fields.insert("Email".to_string(), "ada@example.com".to_string());
        fields.insert("Message".to_string(), "Hello".to_string());
        let payload = SubmissionPayload {
            fields,
            gdpr_consent: true,
            marketing_consent: false,
        };

        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            value,
            json!({
                "Name": "Ada",
                "Email": "ada@example.com",
                "Message": "Hello",
                "GDPRConsent": true,
                "MarketingConsent": false,
            })
        );
    }

    #[test]
    fn test_result_success_true() {
        let result: SubmissionResult = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(result.success);
    }

    #[test]
    fn test_result_missing_success_is_failure() {
        let result: SubmissionResult = serde_json::from_str("{}").unwrap();
        assert!(!result.success);
    }

    #[test]
    fn test_result_ignores_extra_keys() {
        let result: SubmissionResult =
            serde_json::from_str(r#"{"success": true, "id": 7}"#).unwrap();
        assert!(result.success);
    }

    #[test]
    fn test_result_rejects_non_object() {
        assert!(serde_json::from_str::<SubmissionResult>(r#""ok""#).is_err());
    }

    #[test]
    fn test_only_submitting_is_in_flight() {
        assert!(SubmissionState::Submitting.is_in_flight());
        for state in [
            SubmissionState::Idle,
            SubmissionState::Validating,
            SubmissionState::Success,
            SubmissionState::Failure,
        ] {
            assert!(!state.is_in_flight());
        }
    }

    #[test]
    fn test_default_state_is_idle() {
        assert_eq!(SubmissionState::default(), SubmissionState::Idle);
    }
}
