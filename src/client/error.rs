//! Errors raised while sending the contact form

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    /// The configured server address does not form a valid endpoint URL
    #[error("invalid server address '{address}': {reason}")]
    InvalidEndpoint { address: String, reason: String },

    /// Connection, TLS, timeout or body read failure
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-2xx status
    #[error("server responded with status {0}")]
    Status(u16),

    /// Response body was not a submission result
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request task ended without reporting back
    #[error("submission was interrupted")]
    Interrupted,
}
