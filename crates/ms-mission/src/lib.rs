//! `ms-mission`: asynchronous path searches and mission assignment.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`task`]        | `TaskHandle` / `Completion` one-shot pair, `TaskPoll`     |
//! | [`executor`]    | `Executor` trait, `InlineExecutor`                        |
//! | [`pool`]        | `WorkerPool`: fixed-size Rayon pool with purge + join    |
//! | [`dispatcher`]  | `MissionDispatcher`, `DispatchReport`                     |
//! | [`error`]       | `MissionError`, `MissionResult<T>`                        |
//!
//! # Per-tick reconciliation
//!
//! ```text
//! for id in wanting (ascending):
//!   pending + ready      → assign_route(id, result); drop pending entry
//!   pending + not ready  → skip; id stays idle this tick
//!   pending + abandoned  → drop pending entry; resubmitted next tick
//!   not pending          → random destination; submit search; mark pending
//! ```
//!
//! The tick thread only ever polls.  It never blocks on a search except when
//! joining the pool at shutdown.

pub mod dispatcher;
pub mod error;
pub mod executor;
pub mod pool;
pub mod task;


pub use dispatcher::{DispatchReport, MissionDispatcher};
pub use error::{MissionError, MissionResult};
pub use executor::{Executor, InlineExecutor};
pub use pool::WorkerPool;
pub use task::{Completion, TaskHandle, TaskPoll, task_channel};
