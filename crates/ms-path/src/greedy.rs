//! Greedy neighbour walk.
//!
//! At every step the walker moves to the open orthogonal neighbour closest
//! (Manhattan) to the destination, never stepping straight back onto the
//! cell it just left.  The first minimal candidate in expansion order wins.
//!
//! This is deliberately cheap and can fail when a path exists: concave
//! obstacle pockets trap it, and longer cycles are only caught by the step
//! cap of `distance(src, dest) + STEP_SLACK`.

use ms_core::{Point, Size};

use crate::{ObstacleSet, PathSearch, Route};

/// Steps allowed beyond the straight-line Manhattan distance before the walk
/// is declared stuck.
pub const STEP_SLACK: u32 = 50;

/// Non-optimal, bounded greedy search.
#[derive(Copy, Clone, Debug, Default)]
pub struct Greedy;

/// How a greedy walk ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WalkOutcome {
    Arrived(Route),
    /// No open neighbour other than the cell just left.
    DeadEnd { steps: usize },
    /// [`step_limit`] steps taken without reaching the destination.
    Capped { steps: usize },
}

impl Greedy {
    /// Walk from `src` towards `dest`, reporting why the walk stopped.
    pub fn walk(src: Point, dest: Point, bounds: Size, obstacles: &ObstacleSet) -> WalkOutcome {
        let limit = step_limit(src, dest);
        let mut route = Route::new();
        let mut current = src;
        // The cell visited before `current`; `src` counts as visited.
        let mut previous: Option<Point> = None;

        while current != dest {
            if route.len() >= limit {
                return WalkOutcome::Capped { steps: route.len() };
            }

            let best = current
                .neighbors()
                .into_iter()
                .filter(|&cell| cell.within(bounds))
                .filter(|&cell| !obstacles.contains(cell))
                .filter(|&cell| Some(cell) != previous)
                .min_by_key(|&cell| cell.distance(dest));

            let Some(next) = best else {
                return WalkOutcome::DeadEnd { steps: route.len() };
            };

            route.push(next);
            previous = Some(current);
            current = next;
        }

        WalkOutcome::Arrived(route)
    }
}

impl PathSearch for Greedy {
    fn search(&self, src: Point, dest: Point, bounds: Size, obstacles: &ObstacleSet) -> Route {
        match Greedy::walk(src, dest, bounds, obstacles) {
            WalkOutcome::Arrived(route) => route,
            WalkOutcome::DeadEnd { .. } | WalkOutcome::Capped { .. } => Route::new(),
        }
    }
}

/// Longest route the greedy walk may produce from `src` to `dest`.
#[inline]
pub fn step_limit(src: Point, dest: Point) -> usize {
    (src.distance(dest) + STEP_SLACK) as usize
}
