//! Stand-in client used when no endpoint is configured.

use std::thread;
use std::time::Duration;

use tracing::info;

use super::{LeadPayload, SubmissionClient, SubmissionError};

/// Accepts every order after a fixed delay.
#[derive(Debug, Clone)]
pub struct SimulatedSubmissionClient {
    latency: Duration,
}

impl SimulatedSubmissionClient {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for SimulatedSubmissionClient {
    fn default() -> Self {
        Self::new(Duration::from_millis(800))
    }
}

impl SubmissionClient for SimulatedSubmissionClient {
    fn submit(&self, lead: &LeadPayload) -> Result<(), SubmissionError> {
        thread::sleep(self.latency);
        info!(
            "No submission endpoint configured; order for '{}' accepted locally",
            lead.vehicle.name
        );
        Ok(())
    }
}
