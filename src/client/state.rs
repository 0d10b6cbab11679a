use std::sync::Arc;
use std::time::Duration;

use crate::{
    callback::SuccessHandler, policy::RetryPolicy, scheduler::Scheduler, transport::Transport,
};

#[derive(Default)]
pub(crate) struct BuilderState {
    pub(crate) transport: Option<Arc<dyn Transport>>,
    pub(crate) timeout: Option<Duration>,
    pub(crate) retry_policy: Option<Arc<dyn RetryPolicy>>,
    pub(crate) success_handler: Option<Arc<dyn SuccessHandler>>,
    pub(crate) scheduler: Option<Arc<dyn Scheduler>>,
}
