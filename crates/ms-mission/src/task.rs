//! One-shot result hand-off between a worker task and the tick thread.
//!
//! [`task_channel`] returns a [`Completion`] for the worker side and a
//! [`TaskHandle`] for the submitter.  The handle is polled without blocking.
//! If the completion is dropped without a value (the task was purged before
//! it started, or panicked) the handle reports [`TaskPoll::Abandoned`].

use std::sync::mpsc::{self, Receiver, SyncSender, TryRecvError};

/// Outcome of a non-blocking [`TaskHandle::poll`].
#[derive(Debug, PartialEq, Eq)]
pub enum TaskPoll<T> {
    Ready(T),
    Pending,
    /// The task will never produce a value.
    Abandoned,
}

/// Worker-side half: deliver exactly one value.
pub struct Completion<T> {
    tx: SyncSender<T>,
}

impl<T> Completion<T> {
    pub fn complete(self, value: T) {
        // The submitter may have dropped its handle; the value is then unwanted.
        let _ = self.tx.send(value);
    }
}

/// Submitter-side half of a one-shot task result.
pub struct TaskHandle<T> {
    rx:        Receiver<T>,
    ready:     Option<T>,
    abandoned: bool,
}

/// Create a linked [`Completion`] / [`TaskHandle`] pair.
pub fn task_channel<T>() -> (Completion<T>, TaskHandle<T>) {
    let (tx, rx) = mpsc::sync_channel(1);
    let handle = TaskHandle { rx, ready: None, abandoned: false };
    (Completion { tx }, handle)
}

impl<T> TaskHandle<T> {
    /// Take the result if it has arrived.
    pub fn poll(&mut self) -> TaskPoll<T> {
        self.refresh();
        match self.ready.take() {
            Some(value)            => TaskPoll::Ready(value),
            None if self.abandoned => TaskPoll::Abandoned,
            None                   => TaskPoll::Pending,
        }
    }

    /// `true` once a result is waiting to be taken.  Never blocks.
    pub fn is_ready(&mut self) -> bool {
        self.refresh();
        self.ready.is_some()
    }

    /// `true` if the task ended without a result.
    pub fn is_abandoned(&mut self) -> bool {
        self.refresh();
        self.ready.is_none() && self.abandoned
    }

    /// The result, if ready.  Never blocks.
    pub fn take(&mut self) -> Option<T> {
        self.refresh();
        self.ready.take()
    }

    /// Block until the task completes or is abandoned.
    pub fn wait(mut self) -> Option<T> {
        match self.ready.take() {
            Some(value) => Some(value),
            None        => self.rx.recv().ok(),
        }
    }

    fn refresh(&mut self) {
        if self.ready.is_some() || self.abandoned {
            return;
        }
        match self.rx.try_recv() {
            Ok(value)                       => self.ready = Some(value),
            Err(TryRecvError::Empty)        => {}
            Err(TryRecvError::Disconnected) => self.abandoned = true,
        }
    }
}
