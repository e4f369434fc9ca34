//! Trait abstraction for the contact endpoint to enable mocking in tests

use super::error::SubmitError;
use crate::state::{SubmissionPayload, SubmissionResult};
use async_trait::async_trait;

/// Sends a contact form submission to the backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactClientTrait: Send + Sync {
    /// Post one submission and decode the server's verdict
    async fn submit_contact(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<SubmissionResult, SubmitError>;
}
