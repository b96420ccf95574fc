//! A* over the 4-connected grid.
//!
//! Uniform step cost 1 and the Manhattan heuristic make every expansion
//! order consistent, so the first time the destination leaves the open set
//! its `g`-score is the shortest step count.
//!
//! Scratch state (`g`-scores, predecessor links) lives in dense `Vec`s indexed
//! by [`Size::cell_index`]; a search allocates `O(area)` once and touches only
//! the cells it visits.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ms_core::{Point, Size};

use crate::{ObstacleSet, PathSearch, Route};

/// Marks a cell with no predecessor.
const NO_CELL: usize = usize::MAX;

/// Shortest-path search with a Manhattan-distance heuristic.
#[derive(Copy, Clone, Debug, Default)]
pub struct AStar;

impl PathSearch for AStar {
    fn search(&self, src: Point, dest: Point, bounds: Size, obstacles: &ObstacleSet) -> Route {
        astar(src, dest, bounds, obstacles)
    }
}

/// Open-set entry: `(f, seq, g, cell)`.  `seq` is unique and increasing, so
/// equal `f`-scores pop in insertion order and `g`/`cell` never decide order.
type OpenEntry = Reverse<(u32, u64, u32, usize)>;

fn astar(src: Point, dest: Point, bounds: Size, obstacles: &ObstacleSet) -> Route {
    if src == dest || !src.within(bounds) || !dest.within(bounds) {
        return Route::new();
    }

    let area = bounds.area();
    let mut g_score   = vec![u32::MAX; area];
    let mut came_from = vec![NO_CELL; area];

    let start = bounds.cell_index(src);
    let goal  = bounds.cell_index(dest);
    g_score[start] = 0;

    let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
    let mut seq: u64 = 0;
    open.push(Reverse((src.distance(dest), seq, 0, start)));

    while let Some(Reverse((_, _, g, cell))) = open.pop() {
        if cell == goal {
            return reconstruct(&came_from, bounds, start, goal);
        }

        // Skip stale entries superseded by a cheaper push.
        if g > g_score[cell] {
            continue;
        }

        let current = bounds.cell_at(cell);
        for neighbor in current.neighbors() {
            if !neighbor.within(bounds) || obstacles.contains(neighbor) {
                continue;
            }

            let next = bounds.cell_index(neighbor);
            let tentative = g + 1;
            if tentative < g_score[next] {
                g_score[next]   = tentative;
                came_from[next] = cell;
                seq += 1;
                open.push(Reverse((tentative + neighbor.distance(dest), seq, tentative, next)));
            }
        }
    }

    Route::new()
}

/// Walk predecessor links from `goal` back to (excluding) `start`.
fn reconstruct(came_from: &[usize], bounds: Size, start: usize, goal: usize) -> Route {
    let mut route = Route::new();
    let mut cur = goal;
    while cur != start {
        route.push(bounds.cell_at(cur));
        cur = came_from[cur];
        debug_assert_ne!(cur, NO_CELL, "broken predecessor chain");
    }
    route.reverse();
    route
}
