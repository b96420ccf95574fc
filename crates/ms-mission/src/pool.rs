//! Fixed-size worker pool backed by a dedicated Rayon thread pool.

use std::any::Any;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};

use tracing::{debug, info, warn};

use crate::error::MissionResult;
use crate::executor::Executor;
use crate::task::{TaskHandle, task_channel};

/// Runs path searches on a fixed set of `path-worker-{i}` threads.
///
/// Each task records the purge epoch it was submitted in.  [`purge`] bumps the
/// epoch, so tasks that have not started by then drop their completion
/// instead of running.  [`join`] waits until no task is queued or running.
///
/// A panicking task is logged and its handle becomes abandoned; the worker
/// thread survives.
///
/// [`purge`]: Executor::purge
/// [`join`]: Executor::join
pub struct WorkerPool {
    pool:      rayon::ThreadPool,
    epoch:     Arc<AtomicU64>,
    in_flight: Arc<InFlight>,
}

impl WorkerPool {
    /// Start a pool with `threads` workers, or one per logical core for `None`.
    pub fn new(threads: Option<usize>) -> MissionResult<Self> {
        let mut builder = rayon::ThreadPoolBuilder::new()
            .thread_name(|i| format!("path-worker-{i}"))
            .panic_handler(log_panic);
        if let Some(n) = threads {
            builder = builder.num_threads(n);
        }
        let pool = builder.build()?;
        info!(threads = pool.current_num_threads(), "search worker pool started");

        Ok(Self {
            pool,
            epoch:     Arc::new(AtomicU64::new(0)),
            in_flight: Arc::new(InFlight::default()),
        })
    }

    /// Tasks submitted and not yet finished or discarded.
    pub fn in_flight(&self) -> usize {
        self.in_flight.count()
    }
}

impl Executor for WorkerPool {
    fn submit<T, F>(&self, task: F) -> TaskHandle<T>
    where
        T: Send + 'static,
        F: FnOnce() -> T + Send + 'static,
    {
        let (done, handle) = task_channel();
        let epoch     = Arc::clone(&self.epoch);
        let submitted = epoch.load(Ordering::Acquire);
        let guard     = InFlight::enter(&self.in_flight);

        self.pool.spawn(move || {
            // Declared after the guard so it drops first: a joined pool never
            // leaves a handle pending, even when the task unwinds.
            let _guard = guard;
            let done = done;

            // Purged while queued: dropping `done` abandons the handle.
            if epoch.load(Ordering::Acquire) != submitted {
                return;
            }
            done.complete(task());
        });
        handle
    }

    fn purge(&self) {
        let epoch = self.epoch.fetch_add(1, Ordering::AcqRel) + 1;
        debug!(epoch, in_flight = self.in_flight(), "purged queued searches");
    }

    fn join(&self) {
        self.in_flight.wait_idle();
    }

    fn thread_count(&self) -> usize {
        self.pool.current_num_threads()
    }
}

fn log_panic(payload: Box<dyn Any + Send>) {
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string());
    warn!(%message, "path search task panicked");
}

// ── In-flight accounting ─────────────────────────────────────────────────────

#[derive(Default)]
struct InFlight {
    count: Mutex<usize>,
    idle:  Condvar,
}

impl InFlight {
    fn enter(this: &Arc<Self>) -> InFlightGuard {
        *this.lock() += 1;
        InFlightGuard(Arc::clone(this))
    }

    fn count(&self) -> usize {
        *self.lock()
    }

    fn wait_idle(&self) {
        let mut count = self.lock();
        while *count > 0 {
            count = self.idle.wait(count).unwrap_or_else(PoisonError::into_inner);
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, usize> {
        self.count.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Decrements the in-flight count when the task finishes, is skipped, or
/// unwinds.
struct InFlightGuard(Arc<InFlight>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        let mut count = self.0.lock();
        *count -= 1;
        if *count == 0 {
            self.0.idle.notify_all();
        }
    }
}
