//! Counter of in-flight retries that can be awaited until it drops to zero.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use tokio::sync::Notify;

#[derive(Debug, Default)]
pub struct Outstanding {
    count: AtomicUsize,
    idle: Notify,
}

impl Outstanding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one unit of work, released when the guard is dropped.
    pub fn register(self: &Arc<Self>) -> OutstandingGuard {
        self.count.fetch_add(1, Ordering::SeqCst);
        OutstandingGuard {
            outstanding: Arc::clone(self),
        }
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Resolves once no work is registered. Work registered while waiting is
    /// waited for as well.
    pub async fn wait_idle(&self) {
        loop {
            // Created before the check so a release in between is not missed.
            let notified = self.idle.notified();
            if self.count() == 0 {
                return;
            }
            notified.await;
        }
    }

    fn release(&self) {
        if self.count.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.idle.notify_waiters();
        }
    }
}

/// Releases one unit of outstanding work when dropped.
#[derive(Debug)]
pub struct OutstandingGuard {
    outstanding: Arc<Outstanding>,
}

impl Drop for OutstandingGuard {
    fn drop(&mut self) {
        self.outstanding.release();
    }
}
