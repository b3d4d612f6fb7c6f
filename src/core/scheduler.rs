//! Deferred tasks with cancellation
//!
//! Every timer the binders start goes through a [`Scheduler`] and is held in a [`TaskSlot`],
//! so tearing a binder down never leaves a callback that mutates a detached element.

use std::cell::RefCell;
use std::time::Duration;

use crate::core::error::HostError;

/// Handle to a scheduled task
pub trait TaskHandle {
    /// Prevent the task from running. Cancelling a task that already ran is a no-op.
    fn cancel(&self);
}

/// Runs one-shot tasks after a delay on the host event loop
pub trait Scheduler {
    type Handle: TaskHandle;

    fn schedule(
        &self,
        delay: Duration,
        task: Box<dyn FnOnce()>,
    ) -> Result<Self::Handle, HostError>;
}

/// Holds at most one pending task; storing a new one cancels the previous.
pub struct TaskSlot<H: TaskHandle> {
    handle: RefCell<Option<H>>,
}

impl<H: TaskHandle> TaskSlot<H> {
    pub fn new() -> Self {
        Self {
            handle: RefCell::new(None),
        }
    }

    pub fn set(&self, handle: H) {
        if let Some(previous) = self.handle.borrow_mut().replace(handle) {
            previous.cancel();
        }
    }

    /// Forget the stored handle without cancelling it (the task has run)
    pub fn clear(&self) {
        self.handle.borrow_mut().take();
    }

    pub fn cancel(&self) {
        if let Some(handle) = self.handle.borrow_mut().take() {
            handle.cancel();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.handle.borrow().is_some()
    }
}

impl<H: TaskHandle> Default for TaskSlot<H> {
    fn default() -> Self {
        Self::new()
    }
}
