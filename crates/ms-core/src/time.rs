//! Tick counter and run configuration.

use std::fmt;
use std::time::Duration;

use crate::{CoreError, CoreResult, PathAlgorithm, Size};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// One iteration of the simulation's update/render loop.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    #[inline]
    pub fn next(self) -> Tick {
        self.offset(1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Immutable configuration for one run.
///
/// The front-end builds this from its command line; the core never parses
/// anything itself.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Grid dimensions.  Every position, obstacle and destination lies inside.
    pub bounds: Size,

    /// Entities spawned at startup.  Fixed for the run.
    pub entity_count: usize,

    /// Random obstacles generated at startup.  Must be below `bounds.area()`.
    pub obstacle_count: usize,

    /// Search worker threads.  `None` uses all logical cores.
    pub worker_threads: Option<usize>,

    /// Target wall-clock duration of one tick.  A tick that runs longer is
    /// not compensated for.
    pub tick_interval: Duration,

    /// Search algorithm used for every mission.
    pub algorithm: PathAlgorithm,

    /// Vacated positions remembered per entity.
    pub trail_capacity: usize,

    /// Master RNG seed.  The same seed places the same obstacles and entities
    /// and draws the same destination sequence.
    pub seed: u64,

    /// Stop after this many ticks.  `None` runs until the stop token trips.
    pub max_ticks: Option<u64>,
}

impl SimConfig {
    pub const DEFAULT_ENTITIES: usize = 20;
    pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(20);
    pub const DEFAULT_TRAIL_CAPACITY: usize = 20;

    /// Defaults for a grid of `bounds`: 20 entities, one obstacle per ten
    /// cells, all cores, 20 ms ticks, A*.
    pub fn new(bounds: Size) -> Self {
        Self {
            bounds,
            entity_count:   Self::DEFAULT_ENTITIES,
            obstacle_count: Self::default_obstacles(bounds),
            worker_threads: None,
            tick_interval:  Self::DEFAULT_TICK_INTERVAL,
            algorithm:      PathAlgorithm::default(),
            trail_capacity: Self::DEFAULT_TRAIL_CAPACITY,
            seed:           0,
            max_ticks:      None,
        }
    }

    /// One obstacle per ten cells.
    pub fn default_obstacles(bounds: Size) -> usize {
        bounds.area() / 10
    }

    /// Reject configurations the simulation cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.bounds.is_empty() {
            return Err(CoreError::Config(format!("grid bounds {} are empty", self.bounds)));
        }
        if self.obstacle_count >= self.bounds.area() {
            return Err(CoreError::Config(format!(
                "{} obstacles leave no free cell on a {} grid",
                self.obstacle_count, self.bounds
            )));
        }
        if self.worker_threads == Some(0) {
            return Err(CoreError::Config("worker thread count must be at least 1".into()));
        }
        if self.trail_capacity == 0 {
            return Err(CoreError::Config("trail capacity must be at least 1".into()));
        }
        Ok(())
    }
}
