#[path = "scheduler/task.rs"]
mod task;

#[path = "scheduler/outstanding.rs"]
mod outstanding;

#[path = "scheduler/spawn.rs"]
mod spawn;

use async_trait::async_trait;

pub use outstanding::{Outstanding, OutstandingGuard};
pub use spawn::TaskScheduler;
pub use task::RetryTask;

/// Arranges for a failed request to be attempted again after its delay.
///
/// `schedule` must return promptly; the next attempt runs elsewhere, either on a
/// background task ([`TaskScheduler`]) or from a queue the implementation owns,
/// by calling [`RetryTask::resume`] once the delay has passed.
#[async_trait]
pub trait Scheduler: Send + Sync {
    fn schedule(&self, task: RetryTask);

    /// Waits until every retry scheduled so far has finished. Schedulers that
    /// hand work to an external system have nothing to wait for.
    async fn drain(&self) {}

    /// Number of retries scheduled but not yet finished.
    fn outstanding(&self) -> usize {
        0
    }
}
