use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Request;

use crate::{
    callback::SuccessHandler,
    classify::{classify, Outcome},
    policy::RetryPolicy,
    scheduler::{RetryTask, Scheduler},
    transport::Transport,
};

use super::builder::ClientBuilder;

/// How a single attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// 2xx response; the success handler has run.
    Succeeded,
    /// Failed and handed to the scheduler.
    Retrying { delay: Duration },
    /// Failed and the retry policy gave up.
    Abandoned,
}

/// Performs HTTP requests and reschedules the ones that fail.
///
/// Cloning is cheap; every clone shares the same transport, policy, handler,
/// and scheduler.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
    retry_policy: Arc<dyn RetryPolicy>,
    success_handler: Option<Arc<dyn SuccessHandler>>,
    scheduler: Arc<dyn Scheduler>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("success_handler", &self.success_handler.is_some())
            .field("outstanding", &self.scheduler.outstanding())
            .finish_non_exhaustive()
    }
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub(super) fn from_parts(
        transport: Arc<dyn Transport>,
        retry_policy: Arc<dyn RetryPolicy>,
        success_handler: Option<Arc<dyn SuccessHandler>>,
        scheduler: Arc<dyn Scheduler>,
    ) -> Self {
        Self {
            transport,
            retry_policy,
            success_handler,
            scheduler,
        }
    }

    /// Performs the request; if it fails it is handed to the scheduler.
    ///
    /// Only the first attempt runs on the caller's task. Later attempts run
    /// wherever the scheduler puts them, and their failures are reported to the
    /// retry policy only.
    pub async fn execute(&self, request: impl Into<Arc<Request>>) {
        self.run_attempt(request.into(), 0).await;
    }

    /// Runs attempt number `attempt` of `request`.
    ///
    /// Schedulers call this (through [`RetryTask::resume`]) to continue a
    /// rescheduled request.
    pub async fn run_attempt(&self, request: Arc<Request>, attempt: u32) -> AttemptOutcome {
        log::debug!(
            "Attempt {attempt}: {} {}",
            request.method(),
            request.url()
        );
        let result = self.transport.send(&request).await;

        let reason = match classify(result).await {
            Outcome::Success(mut response) => {
                log::debug!(
                    "Attempt {attempt} of {} succeeded with {}",
                    request.url(),
                    response.status()
                );
                if let Some(handler) = &self.success_handler {
                    handler.on_success(&request, &mut response, attempt).await;
                }
                drop(response);
                return AttemptOutcome::Succeeded;
            }
            Outcome::Failure(reason) => reason,
        };

        let decision = self.retry_policy.decide(&request, &reason, attempt);
        if !decision.retry {
            log::debug!("Abandoning {} after attempt {attempt}: {reason}", request.url());
            return AttemptOutcome::Abandoned;
        }

        let delay = decision.delay;
        self.scheduler.schedule(RetryTask {
            client: self.clone(),
            request,
            attempt,
            delay,
            reason,
        });
        AttemptOutcome::Retrying { delay }
    }

    /// Waits for all retries scheduled so far to finish.
    pub async fn drain(&self) {
        self.scheduler.drain().await
    }

    /// Number of retries scheduled but not yet finished.
    pub fn outstanding(&self) -> usize {
        self.scheduler.outstanding()
    }

    pub fn scheduler(&self) -> &Arc<dyn Scheduler> {
        &self.scheduler
    }
}
