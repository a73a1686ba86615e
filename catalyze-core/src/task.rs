//! Abortable scheduled tasks.
//!
//! Timed visual transitions (modal open/close) are modeled as cancellable
//! tasks: the owner keeps the handle of its pending transition and aborts it
//! before scheduling a new one, so the latest request always wins.

use tokio::task::AbortHandle;

/// A handle to a spawned task that can be aborted.
#[derive(Debug)]
pub struct TaskHandle {
    abort_handle: AbortHandle,
}

impl TaskHandle {
    pub fn new(abort_handle: AbortHandle) -> Self {
        Self { abort_handle }
    }

    /// Abort the task. It is cancelled at its next await point.
    pub fn abort(&self) {
        self.abort_handle.abort();
    }

    /// Whether the task completed or was aborted.
    pub fn is_finished(&self) -> bool {
        self.abort_handle.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn abort_cancels_a_pending_task() {
        let applied = Arc::new(AtomicBool::new(false));
        let flag = applied.clone();
        let join = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            flag.store(true, Ordering::SeqCst);
        });
        let handle = TaskHandle::new(join.abort_handle());

        handle.abort();
        tokio::time::sleep(Duration::from_millis(80)).await;

        assert!(handle.is_finished());
        assert!(!applied.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn finished_tasks_report_finished() {
        let join = tokio::spawn(async {});
        let handle = TaskHandle::new(join.abort_handle());
        let _ = join.await;
        assert!(handle.is_finished());
    }
}
