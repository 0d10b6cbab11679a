//! Background retries for HTTP requests.
//!
//! A [`Client`] performs a request once on the caller's task. A transport error
//! or a non-2xx status is handed to the [`RetryPolicy`], which decides whether
//! and when to try again; the [`Scheduler`] then runs the next attempt in the
//! background. The caller never waits for retries, and learns about success
//! only through the optional [`SuccessHandler`].
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use tryhttp::{Client, RetryDecision};
//!
//! # async fn run() -> Result<(), tryhttp::TryHttpError> {
//! let client = Client::builder()
//!     .retry(|_req, _reason, attempt| {
//!         RetryDecision::from((Duration::from_millis(200), attempt < 5))
//!     })
//!     .on_success(|req, resp, attempt| {
//!         println!("{} -> {} after {attempt} retries", req.url(), resp.status());
//!     })
//!     .build()?;
//!
//! let request = reqwest::Request::new(
//!     reqwest::Method::POST,
//!     "https://example.com/hook".parse().unwrap(),
//! );
//! client.execute(request).await;
//!
//! // Before shutting down, wait for pending retries.
//! client.drain().await;
//! # Ok(())
//! # }
//! ```

pub mod callback;
pub mod classify;
pub mod client;
pub mod error;
pub mod failure;
pub mod policy;
pub mod scheduler;
pub mod transport;

#[cfg(test)]
mod test_support;

pub use callback::SuccessHandler;
pub use classify::{classify, Outcome, BODY_PREFIX_LIMIT};
pub use client::{AttemptOutcome, Client, ClientBuilder};
pub use error::TryHttpError;
pub use failure::{FailureReason, StatusError, TransportError};
pub use policy::{BackoffConfig, ExponentialBackoff, Logged, RetryDecision, RetryPolicy};
pub use scheduler::{RetryTask, Scheduler, TaskScheduler};
pub use transport::{ReqwestTransport, Transport, DEFAULT_TIMEOUT};
