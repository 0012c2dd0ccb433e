//! JSON-over-HTTP lead submission.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::error::{Result, ShowroomError};

use super::{LeadPayload, SubmissionClient, SubmissionError};

/// Posts orders to a configured endpoint.
pub struct HttpSubmissionClient {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpSubmissionClient {
    /// Create a client with the default 30-second timeout.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        Self::with_timeout(endpoint, Duration::from_secs(30))
    }

    /// Create a client with a custom timeout.
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("showroom/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| ShowroomError::Submission {
                message: format!("failed to build HTTP client: {}", e),
            })?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl SubmissionClient for HttpSubmissionClient {
    fn submit(&self, lead: &LeadPayload) -> std::result::Result<(), SubmissionError> {
        debug!("POST {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .json(lead)
            .send()
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().unwrap_or_default();
        Err(SubmissionError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::SelectedVehicle;
    use crate::wizard::{Draft, Field, FieldValue, PaymentMethod};
    use chrono::Utc;
    use httpmock::prelude::*;

    fn lead() -> LeadPayload {
        let mut draft = Draft::new(Some(PaymentMethod::Cash));
        draft
            .apply(Field::FullName, FieldValue::text("Ali Hassan"))
            .unwrap();
        let vehicle = SelectedVehicle {
            id: Some("k5".to_string()),
            name: "Kia K5".to_string(),
            year: 2024,
            price: 99_000,
            image_url: None,
            specs: Vec::new(),
        };
        LeadPayload::new(&draft, &vehicle, Utc::now())
    }

    #[test]
    fn default_timeout_is_30_seconds() {
        let client = HttpSubmissionClient::new("http://localhost/leads").unwrap();
        assert_eq!(client.timeout(), Duration::from_secs(30));
        assert_eq!(client.endpoint(), "http://localhost/leads");
    }

    #[test]
    fn posts_json_body() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/leads")
                .header("content-type", "application/json")
                .body_includes("\"fullName\":\"Ali Hassan\"")
                .body_includes("\"paymentMethod\":\"cash\"");
            then.status(201);
        });

        let client = HttpSubmissionClient::new(server.url("/leads")).unwrap();
        client.submit(&lead()).unwrap();
        mock.assert();
    }

    #[test]
    fn non_success_status_is_rejection() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/leads");
            then.status(422).body("missing phone");
        });

        let client = HttpSubmissionClient::new(server.url("/leads")).unwrap();
        match client.submit(&lead()).unwrap_err() {
            SubmissionError::Rejected { status, body } => {
                assert_eq!(status, 422);
                assert_eq!(body, "missing phone");
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn unreachable_endpoint_is_transport_error() {
        let client = HttpSubmissionClient::with_timeout(
            "http://127.0.0.1:9/leads",
            Duration::from_secs(2),
        )
        .unwrap();
        assert!(matches!(
            client.submit(&lead()),
            Err(SubmissionError::Transport(_))
        ));
    }
}
