//! Core error type.
//!
//! Only configuration problems are runtime errors.  Contract violations
//! (unknown entity ids, double route assignment, out-of-bounds cells) panic,
//! and search failures are empty routes.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("unknown path algorithm '{0}' (expected 'astar' or 'greedy')")]
    UnknownAlgorithm(String),
}

/// Shorthand result type for `ms-core`.
pub type CoreResult<T> = Result<T, CoreError>;
