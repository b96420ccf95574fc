//! Per-tick wall-clock profiling.

use std::time::Duration;

/// Running statistics over recorded tick durations.
#[derive(Clone, Debug, Default)]
pub struct TickTimer {
    last:       Duration,
    total:      Duration,
    iterations: u64,
}

impl TickTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, elapsed: Duration) {
        self.last = elapsed;
        self.total += elapsed;
        self.iterations += 1;
    }

    /// Most recently recorded duration.
    pub fn last(&self) -> Duration {
        self.last
    }

    /// Mean over every recorded duration; zero before the first.
    pub fn average(&self) -> Duration {
        match u32::try_from(self.iterations) {
            Ok(0)  => Duration::ZERO,
            Ok(n)  => self.total / n,
            Err(_) => Duration::from_secs_f64(self.total.as_secs_f64() / self.iterations as f64),
        }
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }
}
