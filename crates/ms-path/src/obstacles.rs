//! The static obstacle set.

use ms_core::{Point, SimRng, Size};

/// Cells no entity may enter.  Generated once at startup and never mutated,
/// so worker tasks share it through an `Arc` without locking.
///
/// Lookups are a linear scan over the ordered point list.  Obstacle counts
/// are small relative to the grid; a dense bitmap would be the next step if
/// that stops being true.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObstacleSet {
    points: Vec<Point>,
}

impl ObstacleSet {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// `count` uniformly random cells inside `bounds`.  Duplicates are kept,
    /// so the number of distinct blocked cells may be lower than `count`.
    pub fn generate(bounds: Size, count: usize, rng: &mut SimRng) -> Self {
        let points = (0..count).map(|_| rng.random_point(bounds)).collect();
        Self { points }
    }

    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        self.points.iter().any(|&p| p == point)
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `true` if `point` is inside `bounds` and not an obstacle.
    #[inline]
    pub fn is_open(&self, point: Point, bounds: Size) -> bool {
        point.within(bounds) && !self.contains(point)
    }
}

impl FromIterator<Point> for ObstacleSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
