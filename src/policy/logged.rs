use reqwest::Request;

use crate::failure::FailureReason;

use super::decision::{RetryDecision, RetryPolicy};

/// Wraps a policy and logs every failure and every abandoned request.
#[derive(Clone, Debug)]
pub struct Logged<P> {
    inner: P,
}

impl<P: RetryPolicy> Logged<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: RetryPolicy> RetryPolicy for Logged<P> {
    fn decide(&self, request: &Request, reason: &FailureReason, attempt: u32) -> RetryDecision {
        let decision = self.inner.decide(request, reason, attempt);
        if decision.retry {
            log::warn!(
                "{} {} failed on attempt {attempt}: {reason}; retrying in {:?}",
                request.method(),
                request.url(),
                decision.delay,
            );
        } else {
            log::warn!(
                "{} {} failed on attempt {attempt}: {reason}; giving up",
                request.method(),
                request.url(),
            );
        }
        decision
    }
}
