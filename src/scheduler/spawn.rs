use std::sync::Arc;

use async_trait::async_trait;
use tokio::time::sleep;

use super::{outstanding::Outstanding, RetryTask, Scheduler};

/// Default scheduler: one Tokio task per retry, sleeping for the delay before
/// running the next attempt.
///
/// Every pending retry holds a task, so a long outage grows the task count with
/// the number of failing requests. Pending retries live only in memory and are
/// lost when the process exits. Scheduling outside of a Tokio runtime panics.
#[derive(Debug, Clone, Default)]
pub struct TaskScheduler {
    outstanding: Arc<Outstanding>,
}

impl TaskScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Scheduler for TaskScheduler {
    fn schedule(&self, task: RetryTask) {
        let guard = self.outstanding.register();
        log::debug!(
            "Scheduling attempt {} of {} in {:?} after: {}",
            task.next_attempt(),
            task.request.url(),
            task.delay,
            task.reason,
        );
        tokio::spawn(async move {
            let _guard = guard;
            sleep(task.delay).await;
            task.resume().await;
        });
    }

    async fn drain(&self) {
        self.outstanding.wait_idle().await
    }

    fn outstanding(&self) -> usize {
        self.outstanding.count()
    }
}
