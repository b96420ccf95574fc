//! `ms-sim`: tick loop orchestrator for the mission-sim workspace.
//!
//! # Three-phase tick loop
//!
//! ```text
//! while !stop.is_stopped():
//!   ① Advance   every moving entity takes one step; trails evict.
//!                 Yields the idle ("wanting") entities.
//!   ② Dispatch  reconcile wanting entities with their pending searches:
//!                 install finished routes, submit new searches.
//!   ③ Render    paint bodies, trails and fresh route previews; clear
//!                 evicted trail cells.
//!   sleep for whatever is left of the tick interval
//! on exit: purge queued searches, join running ones
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ms_core::{SimConfig, Size};
//! use ms_mission::WorkerPool;
//! use ms_sim::{SimBuilder, StopToken};
//!
//! let config = SimConfig::new(Size::new(80, 24));
//! let pool = WorkerPool::new(config.worker_threads)?;
//! let mut sim = SimBuilder::new(config).build(pool)?;
//! let summary = sim.run(&mut frontend, &StopToken::new())?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod report;
pub mod sim;
pub mod stop;
pub mod timer;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopFrontend, SimObserver};
pub use report::{RunSummary, TickReport};
pub use sim::Sim;
pub use stop::StopToken;
pub use timer::TickTimer;
