use std::sync::Arc;
use std::time::Duration;

use reqwest::{Request, Response};

use crate::{
    callback::SuccessHandler,
    error::TryHttpError,
    failure::FailureReason,
    policy::{RetryDecision, RetryPolicy},
    scheduler::{Scheduler, TaskScheduler},
    transport::{ReqwestTransport, Transport, DEFAULT_TIMEOUT},
};

use super::{state::BuilderState, wrapper::Client};

/// Builder for configuring a retrying [`Client`].
///
/// A retry policy is mandatory; everything else has a default.
#[derive(Default)]
pub struct ClientBuilder {
    state: BuilderState,
}

impl ClientBuilder {
    /// Creates a new empty builder instance with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the transport used to perform requests.
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.state.transport = Some(Arc::new(transport));
        self
    }

    /// Uses an existing reqwest client as the transport.
    pub fn reqwest_client(self, client: reqwest::Client) -> Self {
        self.transport(ReqwestTransport::new(client))
    }

    /// Sets the total timeout of the default transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.state.timeout = Some(timeout);
        self
    }

    /// Sets the policy deciding whether and when to retry.
    pub fn retry_policy(mut self, policy: impl RetryPolicy + 'static) -> Self {
        self.state.retry_policy = Some(Arc::new(policy));
        self
    }

    /// Sets the retry policy from a closure.
    pub fn retry<F>(self, f: F) -> Self
    where
        F: Fn(&Request, &FailureReason, u32) -> RetryDecision + Send + Sync + 'static,
    {
        self.retry_policy(f)
    }

    /// Sets the handler run after a successful attempt.
    pub fn success_handler(mut self, handler: impl SuccessHandler + 'static) -> Self {
        self.state.success_handler = Some(Arc::new(handler));
        self
    }

    /// Sets the success handler from a closure.
    pub fn on_success<F>(self, f: F) -> Self
    where
        F: Fn(&Request, &mut Response, u32) + Send + Sync + 'static,
    {
        self.success_handler(f)
    }

    /// Sets the scheduler for retries.
    pub fn scheduler(mut self, scheduler: impl Scheduler + 'static) -> Self {
        self.state.scheduler = Some(Arc::new(scheduler));
        self
    }

    /// Sets a scheduler shared with other clients.
    pub fn shared_scheduler(mut self, scheduler: Arc<dyn Scheduler>) -> Self {
        self.state.scheduler = Some(scheduler);
        self
    }

    /// Builds the client, filling in defaults for everything but the retry policy.
    pub fn build(self) -> Result<Client, TryHttpError> {
        let state = self.state;
        log::debug!(
            "Building retrying client. custom_transport={} timeout={:?} success_handler={} custom_scheduler={}",
            state.transport.is_some(),
            state.timeout,
            state.success_handler.is_some(),
            state.scheduler.is_some(),
        );

        let Some(retry_policy) = state.retry_policy else {
            return Err(TryHttpError::InvalidConfig(
                "No retry policy provided".to_string(),
            ));
        };

        let transport: Arc<dyn Transport> = match state.transport {
            Some(transport) => {
                if state.timeout.is_some() {
                    log::warn!("Timeout is ignored when a custom transport is set");
                }
                transport
            }
            None => Arc::new(ReqwestTransport::with_timeout(
                state.timeout.unwrap_or(DEFAULT_TIMEOUT),
            )?),
        };

        let scheduler = state
            .scheduler
            .unwrap_or_else(|| Arc::new(TaskScheduler::new()));

        Ok(Client::from_parts(
            transport,
            retry_policy,
            state.success_handler,
            scheduler,
        ))
    }
}
