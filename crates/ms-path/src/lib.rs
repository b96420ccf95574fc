//! `ms-path`: obstacle set and grid path search.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`obstacles`] | `ObstacleSet`: immutable, shared read-only across workers |
//! | [`search`]    | `PathSearch` trait, `Route`, `find_path`                  |
//! | [`astar`]     | `AStar`: shortest path, Manhattan heuristic              |
//! | [`greedy`]    | `Greedy`: cheap heuristic walk with a step cap           |
//!
//! # Result contract
//!
//! Every search returns the cells *after* `src` up to and including `dest`.
//! An empty route means "no path found"; it is not an error and callers
//! treat it as "stay idle and try another destination".

pub mod astar;
pub mod greedy;
pub mod obstacles;
pub mod search;

#[cfg(test)]
mod tests;

pub use astar::AStar;
pub use greedy::{Greedy, WalkOutcome};
pub use obstacles::ObstacleSet;
pub use search::{PathSearch, Route, find_path};
