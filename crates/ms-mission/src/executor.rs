//! The execution capability the dispatcher submits searches to.

use crate::task::{TaskHandle, task_channel};

/// Runs closures somewhere and hands back a pollable [`TaskHandle`].
///
/// Completion order is unconstrained: handles may become ready in any order
/// relative to submission.
pub trait Executor {
    fn submit<T, F>(&self, task: F) -> TaskHandle<T>
    where
        T: Send + 'static,
        F: FnOnce() -> T + Send + 'static;

    /// Discard tasks that are queued but not yet running.  Their handles
    /// become abandoned.  Tasks already running are unaffected.
    fn purge(&self) {}

    /// Block until every running task has finished.
    fn join(&self) {}

    /// Threads executing tasks.
    fn thread_count(&self) -> usize;
}

/// Runs each task to completion inside `submit`, on the caller's thread.
/// Handles are ready as soon as they are returned.
#[derive(Copy, Clone, Debug, Default)]
pub struct InlineExecutor;

impl Executor for InlineExecutor {
    fn submit<T, F>(&self, task: F) -> TaskHandle<T>
    where
        T: Send + 'static,
        F: FnOnce() -> T + Send + 'static,
    {
        let (done, handle) = task_channel();
        done.complete(task());
        handle
    }

    fn thread_count(&self) -> usize {
        1
    }
}
