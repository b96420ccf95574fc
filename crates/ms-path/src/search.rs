//! Search trait and algorithm dispatch.
//!
//! The dispatcher calls [`find_path`] with the configured
//! [`PathAlgorithm`]; both algorithms are also usable directly through the
//! [`PathSearch`] trait.

use ms_core::{PathAlgorithm, Point, Size};

use crate::{AStar, Greedy, ObstacleSet};

/// Cells from (excluding) the start to (including) the destination.
/// Empty means no path was found.
pub type Route = Vec<Point>;

/// A grid search strategy.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`; searches run on worker threads
/// against a shared [`ObstacleSet`].
pub trait PathSearch: Send + Sync {
    /// Compute a route from `src` to `dest` avoiding `obstacles`.
    ///
    /// `src` and `dest` must be inside `bounds`.  Returns an empty route when
    /// no path is found or `src == dest`.
    fn search(&self, src: Point, dest: Point, bounds: Size, obstacles: &ObstacleSet) -> Route;
}

/// Run the search selected by `algorithm`.
pub fn find_path(
    src:       Point,
    dest:      Point,
    bounds:    Size,
    obstacles: &ObstacleSet,
    algorithm: PathAlgorithm,
) -> Route {
    debug_assert!(src.within(bounds), "search source {src} outside {bounds}");
    debug_assert!(dest.within(bounds), "search destination {dest} outside {bounds}");

    match algorithm {
        PathAlgorithm::AStar  => AStar.search(src, dest, bounds, obstacles),
        PathAlgorithm::Greedy => Greedy.search(src, dest, bounds, obstacles),
    }
}
