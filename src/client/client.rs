//! HTTP client for the contact form endpoint
//!
//! One JSON `POST` per submission. No retries: a transport error, a non-2xx
//! status or an undecodable body is returned as a [`SubmitError`].

use super::error::SubmitError;
use super::traits::ContactClientTrait;
use crate::state::{SubmissionPayload, SubmissionResult};
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;

/// Path appended to the configured server address
const CONTACT_PATH: &str = "contact_form/";

/// Client for the backend's contact form endpoint
#[derive(Debug, Clone)]
pub struct ContactClient {
    http: Client,
    endpoint: Url,
}

impl ContactClient {
    /// Build a client for `<server>/contact_form/`.
    ///
    /// `timeout` of `None` leaves request timing to reqwest's defaults.
    pub fn new(server: &str, timeout: Option<Duration>) -> Result<Self, SubmitError> {
        let endpoint = contact_endpoint(server)?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// Join the server address and the contact path with exactly one slash
pub fn contact_endpoint(server: &str) -> Result<Url, SubmitError> {
    let trimmed = server.trim().trim_end_matches('/');
    let raw = format!("{trimmed}/{CONTACT_PATH}");
    Url::parse(&raw).map_err(|err| SubmitError::InvalidEndpoint {
        address: server.to_string(),
        reason: err.to_string(),
    })
}

#[async_trait]
impl ContactClientTrait for ContactClient {
    async fn submit_contact(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<SubmissionResult, SubmitError> {
        tracing::info!(endpoint = %self.endpoint, "submitting contact form");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "contact form rejected by server");
            return Err(SubmitError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let result: SubmissionResult = serde_json::from_slice(&body)?;
        tracing::debug!(success = result.success, "contact form response decoded");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn sample_payload() -> SubmissionPayload {
        let mut fields = BTreeMap::new();
        fields.insert("Name".to_string(), "Ada".to_string());
        fields.insert("Email".to_string(), "ada@example.com".to_string());
        fields.insert("Message".to_string(), "Hello there".to_string());
        SubmissionPayload {
            fields,
            gdpr_consent: true,
            marketing_consent: true,
        }
    }

    mod endpoint {
        use super::*;

        #[test]
        fn test_appends_contact_path() {
            let url = contact_endpoint("http://localhost:5000").unwrap();
            assert_eq!(url.as_str(), "http://localhost:5000/contact_form/");
        }

        #[test]
        fn test_trailing_slash_not_doubled() {
            let url = contact_endpoint("http://localhost:5000/").unwrap();
            assert_eq!(url.as_str(), "http://localhost:5000/contact_form/");
        }

        #[test]
        fn test_keeps_server_prefix_path() {
            let url = contact_endpoint("https://example.com/api").unwrap();
            assert_eq!(url.as_str(), "https://example.com/api/contact_form/");
        }

        #[test]
        fn test_rejects_garbage_address() {
            let err = contact_endpoint("not a url").unwrap_err();
            assert!(matches!(err, SubmitError::InvalidEndpoint { .. }));
        }

        #[test]
        fn test_client_exposes_endpoint() {
            let client = ContactClient::new("http://127.0.0.1:5000", None).unwrap();
            assert_eq!(
                client.endpoint().as_str(),
                "http://127.0.0.1:5000/contact_form/"
            );
        }
    }

    mod submit {
        use super::*;

        #[tokio::test]
        async fn test_posts_payload_and_reads_success() {
            let server = MockServer::start_async().await;
            let mock = server.mock(|when, then| {
                when.method(POST).path("/contact_form/").json_body(json!({
                    "Name": "Ada",
                    "Email": "ada@example.com",
                    "Message": "Hello there",
                    "GDPRConsent": true,
                    "MarketingConsent": true,
                }));
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!({ "success": true }));
            });

            let client = ContactClient::new(&server.base_url(), None).unwrap();
            let result = client.submit_contact(&sample_payload()).await.unwrap();

            assert!(result.success);
            mock.assert();
        }

        #[tokio::test]
        async fn test_success_false_is_returned_as_result() {
            let server = MockServer::start_async().await;
            server.mock(|when, then| {
                when.method(POST).path("/contact_form/");
                then.status(200).json_body(json!({ "success": false }));
            });

            let client = ContactClient::new(&server.base_url(), None).unwrap();
            let result = client.submit_contact(&sample_payload()).await.unwrap();

            assert!(!result.success);
        }

        #[tokio::test]
        async fn test_missing_success_decodes_as_failure() {
            let server = MockServer::start_async().await;
            server.mock(|when, then| {
                when.method(POST).path("/contact_form/");
                then.status(200).json_body(json!({ "status": "ok" }));
            });

            let client = ContactClient::new(&server.base_url(), None).unwrap();
            let result = client.submit_contact(&sample_payload()).await.unwrap();

            assert!(!result.success);
        }

        #[tokio::test]
        async fn test_non_2xx_is_status_error() {
            let server = MockServer::start_async().await;
            server.mock(|when, then| {
                when.method(POST).path("/contact_form/");
                then.status(500).json_body(json!({ "success": true }));
            });

            let client = ContactClient::new(&server.base_url(), None).unwrap();
            let err = client.submit_contact(&sample_payload()).await.unwrap_err();

            assert!(matches!(err, SubmitError::Status(500)));
        }

        #[tokio::test]
        async fn test_non_json_body_is_decode_error() {
            let server = MockServer::start_async().await;
            server.mock(|when, then| {
                when.method(POST).path("/contact_form/");
                then.status(200).body("<html>oops</html>");
            });

            let client = ContactClient::new(&server.base_url(), None).unwrap();
            let err = client.submit_contact(&sample_payload()).await.unwrap_err();

            assert!(matches!(err, SubmitError::Decode(_)));
        }

        #[tokio::test]
        async fn test_unreachable_server_is_transport_error() {
            // Port 9 (discard) is not expected to accept HTTP
            let client = ContactClient::new("http://127.0.0.1:9", Some(Duration::from_secs(2)))
                .unwrap();
            let err = client.submit_contact(&sample_payload()).await.unwrap_err();

            assert!(matches!(err, SubmitError::Transport(_)));
        }
    }
}
