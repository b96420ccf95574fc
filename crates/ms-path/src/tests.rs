//! Unit tests for ms-path.
//!
//! All grids are built by hand or from a fixed-seed `SimRng`.

#[cfg(test)]
mod helpers {
    use ms_core::{Point, Size};

    use crate::ObstacleSet;

    /// Assert `route` is a legal 4-connected walk from `src` to `dest`.
    pub fn assert_valid_route(
        route:     &[Point],
        src:       Point,
        dest:      Point,
        bounds:    Size,
        obstacles: &ObstacleSet,
    ) {
        assert!(!route.is_empty(), "expected a route from {src} to {dest}");
        assert_eq!(*route.last().unwrap(), dest);

        let mut prev = src;
        for &cell in route {
            assert_eq!(prev.distance(cell), 1, "non-adjacent step {prev} -> {cell}");
            assert!(cell.within(bounds), "{cell} outside {bounds}");
            assert!(!obstacles.contains(cell), "{cell} is an obstacle");
            prev = cell;
        }
    }

    /// Vertical wall at `x` spanning the full height except the cell at `gap_y`.
    pub fn wall_with_gap(bounds: Size, x: i32, gap_y: i32) -> ObstacleSet {
        (0..bounds.height)
            .filter(|&y| y != gap_y)
            .map(|y| Point::new(x, y))
            .collect()
    }

    /// All four orthogonal neighbours of `cell` blocked.
    pub fn boxed_in(cell: Point) -> ObstacleSet {
        cell.neighbors().into_iter().collect()
    }

    /// A cup opening downward around `(10, 10)`: roof at y=8 from x=5..=15,
    /// side walls at x=5 and x=15 down to y=12.
    pub fn downward_cup() -> ObstacleSet {
        let roof  = (5..=15).map(|x| Point::new(x, 8));
        let left  = (9..=12).map(|y| Point::new(5, y));
        let right = (9..=12).map(|y| Point::new(15, y));
        roof.chain(left).chain(right).collect()
    }
}

// ── Obstacle set ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod obstacle_set {
    use ms_core::{Point, SimRng, Size};

    use crate::ObstacleSet;

    #[test]
    fn contains_and_is_open() {
        let set = ObstacleSet::new(vec![Point::new(1, 1), Point::new(2, 3)]);
        let bounds = Size::new(5, 5);
        assert!(set.contains(Point::new(2, 3)));
        assert!(!set.contains(Point::new(3, 2)));
        assert!(!set.is_open(Point::new(1, 1), bounds));
        assert!(set.is_open(Point::new(0, 0), bounds));
        assert!(!set.is_open(Point::new(5, 0), bounds));
    }

    #[test]
    fn generate_is_seeded_and_in_bounds() {
        let bounds = Size::new(30, 10);
        let a = ObstacleSet::generate(bounds, 40, &mut SimRng::new(11));
        let b = ObstacleSet::generate(bounds, 40, &mut SimRng::new(11));
        assert_eq!(a, b);
        assert_eq!(a.len(), 40);
        assert!(a.iter().all(|p| p.within(bounds)));
    }

    #[test]
    fn empty_set() {
        let set = ObstacleSet::empty();
        assert!(set.is_empty());
        assert!(!set.contains(Point::new(0, 0)));
    }
}

// ── A* ────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod astar {
    use ms_core::{PathAlgorithm, Point, SimRng, Size};

    use super::helpers::*;
    use crate::{AStar, ObstacleSet, PathSearch, find_path};

    #[test]
    fn open_grid_staircase() {
        let bounds = Size::new(10, 10);
        let obstacles = ObstacleSet::empty();
        let src  = Point::new(0, 0);
        let dest = Point::new(3, 4);
        let route = find_path(src, dest, bounds, &obstacles, PathAlgorithm::AStar);
        assert_eq!(route.len(), 7);
        assert_eq!(route.last(), Some(&dest));
        assert_valid_route(&route, src, dest, bounds, &obstacles);
    }

    #[test]
    fn optimal_on_obstacle_free_grid() {
        let bounds = Size::new(25, 15);
        let obstacles = ObstacleSet::empty();
        let mut rng = SimRng::new(5);
        for _ in 0..200 {
            let src  = rng.random_point(bounds);
            let dest = rng.random_point(bounds);
            let route = AStar.search(src, dest, bounds, &obstacles);
            assert_eq!(route.len(), src.distance(dest) as usize, "{src} -> {dest}");
        }
    }

    #[test]
    fn routes_through_the_only_gap() {
        let bounds = Size::new(10, 10);
        let gap = Point::new(5, 7);
        let obstacles = wall_with_gap(bounds, 5, gap.y);
        let src  = Point::new(0, 0);
        let dest = Point::new(9, 0);

        let route = AStar.search(src, dest, bounds, &obstacles);
        assert_valid_route(&route, src, dest, bounds, &obstacles);
        assert!(route.contains(&gap));
        // 5 right + 7 down to the gap, then 4 right + 7 up.
        assert_eq!(route.len(), 23);
    }

    #[test]
    fn shortest_length_is_deterministic() {
        let bounds = Size::new(40, 20);
        let obstacles = ObstacleSet::generate(bounds, 120, &mut SimRng::new(9));
        let src  = Point::new(1, 1);
        let dest = Point::new(38, 18);
        let first = AStar.search(src, dest, bounds, &obstacles);
        for _ in 0..5 {
            assert_eq!(AStar.search(src, dest, bounds, &obstacles).len(), first.len());
        }
    }

    #[test]
    fn enclosed_destination_has_no_path() {
        let bounds = Size::new(10, 10);
        let dest = Point::new(5, 5);
        let obstacles = boxed_in(dest);
        assert!(AStar.search(Point::new(0, 0), dest, bounds, &obstacles).is_empty());
    }

    #[test]
    fn enclosed_source_has_no_path() {
        let bounds = Size::new(10, 10);
        let src = Point::new(2, 2);
        let obstacles = boxed_in(src);
        assert!(AStar.search(src, Point::new(8, 8), bounds, &obstacles).is_empty());
    }

    #[test]
    fn obstacle_destination_is_unreachable() {
        let bounds = Size::new(6, 6);
        let dest = Point::new(3, 3);
        let obstacles = ObstacleSet::new(vec![dest]);
        assert!(AStar.search(Point::new(0, 0), dest, bounds, &obstacles).is_empty());
    }

    #[test]
    fn same_cell_is_empty() {
        let bounds = Size::new(4, 4);
        let p = Point::new(2, 2);
        assert!(AStar.search(p, p, bounds, &ObstacleSet::empty()).is_empty());
    }

    #[test]
    fn escapes_the_cup() {
        let bounds = Size::new(20, 20);
        let obstacles = downward_cup();
        let src  = Point::new(10, 10);
        let dest = Point::new(10, 0);
        let route = AStar.search(src, dest, bounds, &obstacles);
        assert_valid_route(&route, src, dest, bounds, &obstacles);
        assert!(route.len() > src.distance(dest) as usize);
    }
}

// ── Greedy ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod greedy {
    use ms_core::{PathAlgorithm, Point, SimRng, Size};

    use super::helpers::*;
    use crate::greedy::step_limit;
    use crate::{Greedy, ObstacleSet, PathSearch, WalkOutcome, find_path};

    #[test]
    fn open_grid_staircase() {
        let bounds = Size::new(10, 10);
        let obstacles = ObstacleSet::empty();
        let src  = Point::new(0, 0);
        let dest = Point::new(3, 4);
        let route = find_path(src, dest, bounds, &obstacles, PathAlgorithm::Greedy);
        assert_eq!(route.len(), 7);
        assert_valid_route(&route, src, dest, bounds, &obstacles);
    }

    #[test]
    fn monotone_on_obstacle_free_grid() {
        let bounds = Size::new(25, 15);
        let obstacles = ObstacleSet::empty();
        let mut rng = SimRng::new(8);
        for _ in 0..200 {
            let src  = rng.random_point(bounds);
            let dest = rng.random_point(bounds);
            let route = Greedy.search(src, dest, bounds, &obstacles);
            assert_eq!(route.len(), src.distance(dest) as usize, "{src} -> {dest}");
        }
    }

    #[test]
    fn trapped_walk_gives_up() {
        let bounds = Size::new(20, 20);
        let obstacles = downward_cup();
        let src  = Point::new(10, 10);
        let dest = Point::new(10, 0);
        assert!(Greedy.search(src, dest, bounds, &obstacles).is_empty());
        assert_eq!(
            Greedy::walk(src, dest, bounds, &obstacles),
            WalkOutcome::Capped { steps: step_limit(src, dest) }
        );
        // A* proves a path exists.
        assert!(!find_path(src, dest, bounds, &obstacles, PathAlgorithm::AStar).is_empty());
    }

    #[test]
    fn blind_alley_is_a_dead_end() {
        let bounds = Size::new(10, 10);
        let obstacles = ObstacleSet::new(vec![Point::new(1, 0), Point::new(1, 1), Point::new(0, 2)]);
        let outcome = Greedy::walk(Point::new(0, 0), Point::new(5, 5), bounds, &obstacles);
        assert_eq!(outcome, WalkOutcome::DeadEnd { steps: 1 });
    }

    #[test]
    fn unobstructed_walk_arrives() {
        let src  = Point::new(0, 0);
        let dest = Point::new(3, 4);
        match Greedy::walk(src, dest, Size::new(10, 10), &ObstacleSet::empty()) {
            WalkOutcome::Arrived(route) => assert_eq!(route.len(), 7),
            other => panic!("expected arrival, got {other:?}"),
        }
    }

    #[test]
    fn never_exceeds_step_limit() {
        let bounds = Size::new(40, 20);
        let mut rng = SimRng::new(21);
        let obstacles = ObstacleSet::generate(bounds, 200, &mut rng);
        for _ in 0..300 {
            let src  = rng.random_point(bounds);
            let dest = rng.random_point(bounds);
            let route = Greedy.search(src, dest, bounds, &obstacles);
            assert!(route.len() <= step_limit(src, dest));
            if !route.is_empty() {
                assert_valid_route(&route, src, dest, bounds, &obstacles);
            }
        }
    }

    #[test]
    fn enclosed_destination_has_no_path() {
        let bounds = Size::new(10, 10);
        let dest = Point::new(5, 5);
        let obstacles = boxed_in(dest);
        assert!(Greedy.search(Point::new(0, 0), dest, bounds, &obstacles).is_empty());
    }

    #[test]
    fn walks_around_a_single_block() {
        let bounds = Size::new(5, 5);
        let obstacles = ObstacleSet::new(vec![Point::new(2, 0)]);
        let src  = Point::new(0, 0);
        let dest = Point::new(4, 0);
        let route = Greedy.search(src, dest, bounds, &obstacles);
        assert_valid_route(&route, src, dest, bounds, &obstacles);
    }

    #[test]
    fn same_cell_is_empty() {
        let p = Point::new(1, 1);
        assert!(Greedy.search(p, p, Size::new(3, 3), &ObstacleSet::empty()).is_empty());
    }
}
