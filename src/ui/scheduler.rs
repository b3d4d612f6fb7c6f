//! Browser timers for the binders

use std::time::Duration;

use leptos::prelude::{TimeoutHandle, set_timeout_with_handle};

use crate::core::error::HostError;
use crate::core::scheduler::{Scheduler, TaskHandle};

/// Schedules tasks with `window.setTimeout`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

/// Pending `setTimeout` registration
pub struct BrowserTimeout(TimeoutHandle);

impl TaskHandle for BrowserTimeout {
    fn cancel(&self) {
        self.0.clear();
    }
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTimeout;

    fn schedule(
        &self,
        delay: Duration,
        task: Box<dyn FnOnce()>,
    ) -> Result<BrowserTimeout, HostError> {
        set_timeout_with_handle(task, delay)
            .map(BrowserTimeout)
            .map_err(|e| HostError::Schedule(format!("{:?}", e)))
    }
}
