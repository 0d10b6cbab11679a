use std::sync::Arc;
use std::time::Duration;

use reqwest::Request;

use crate::{
    client::{AttemptOutcome, Client},
    failure::FailureReason,
};

/// A failed request waiting for its next attempt.
#[derive(Debug)]
pub struct RetryTask {
    /// Client the request was sent with; the next attempt uses it unchanged.
    pub client: Client,
    pub request: Arc<Request>,
    /// Number of the attempt that failed.
    pub attempt: u32,
    /// Delay requested by the retry policy.
    pub delay: Duration,
    /// Why the attempt failed.
    pub reason: FailureReason,
}

impl RetryTask {
    pub fn next_attempt(&self) -> u32 {
        self.attempt + 1
    }

    /// Runs the next attempt right away. Waiting out `delay` is the scheduler's job.
    pub async fn resume(self) -> AttemptOutcome {
        let next = self.next_attempt();
        self.client.run_attempt(self.request, next).await
    }
}
