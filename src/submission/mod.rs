//! Lead submission to the dealership's order endpoint.

mod http;
mod payload;
mod simulated;

pub use http::HttpSubmissionClient;
pub use payload::{LeadPayload, VehicleRef};
pub use simulated::SimulatedSubmissionClient;

use thiserror::Error;

/// Why a submission did not go through.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The endpoint could not be reached.
    #[error("Submission endpoint unreachable: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status.
    #[error("Submission rejected with HTTP {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Sends a completed order somewhere.
pub trait SubmissionClient {
    /// Deliver the order, blocking until it is accepted or refused.
    fn submit(&self, lead: &LeadPayload) -> Result<(), SubmissionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let err = SubmissionError::Rejected {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Submission rejected with HTTP 502: bad gateway"
        );
        assert!(SubmissionError::Transport("timed out".to_string())
            .to_string()
            .contains("timed out"));
    }
}
