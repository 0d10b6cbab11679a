#[path = "policy/decision.rs"]
mod decision;

#[path = "policy/backoff.rs"]
mod backoff;

#[path = "policy/logged.rs"]
mod logged;

pub use backoff::{BackoffConfig, ExponentialBackoff};
pub use decision::{RetryDecision, RetryPolicy};
pub use logged::Logged;
