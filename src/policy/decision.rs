use std::time::Duration;

use reqwest::Request;

use crate::failure::FailureReason;

/// What to do after a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryDecision {
    /// How long to wait before the next attempt.
    pub delay: Duration,
    /// Whether to attempt again at all.
    pub retry: bool,
}

impl RetryDecision {
    /// Retry after `delay`.
    pub fn retry_after(delay: Duration) -> Self {
        Self { delay, retry: true }
    }

    /// Give up on the request.
    pub fn stop() -> Self {
        Self {
            delay: Duration::ZERO,
            retry: false,
        }
    }
}

impl From<(Duration, bool)> for RetryDecision {
    fn from((delay, retry): (Duration, bool)) -> Self {
        Self { delay, retry }
    }
}

/// Decides if and when a failed request is attempted again.
///
/// `attempt` is the number of the attempt that just failed, starting at 0.
/// Any reporting of abandoned requests is up to the implementation.
pub trait RetryPolicy: Send + Sync {
    fn decide(&self, request: &Request, reason: &FailureReason, attempt: u32) -> RetryDecision;
}

impl<F> RetryPolicy for F
where
    F: Fn(&Request, &FailureReason, u32) -> RetryDecision + Send + Sync,
{
    fn decide(&self, request: &Request, reason: &FailureReason, attempt: u32) -> RetryDecision {
        self(request, reason, attempt)
    }
}
