//! Integer grid geometry.
//!
//! The grid is 4-connected: every step moves one cell along x or y and costs
//! one unit.  Manhattan distance is therefore both the movement cost metric
//! and an admissible, consistent A* heuristic.
//!
//! Coordinates are `i32` so that neighbour arithmetic at the grid edge yields
//! negative values that `within` rejects, instead of wrapping.

use std::fmt;

/// A cell on the simulation grid.  `y` grows downward (row index).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance `|dx| + |dy|`.
    #[inline]
    pub fn distance(self, other: Point) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// `true` iff `0 <= x < width` and `0 <= y < height`.
    #[inline]
    pub fn within(self, size: Size) -> bool {
        self.x >= 0 && self.x < size.width && self.y >= 0 && self.y < size.height
    }

    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Point {
        Point { x: self.x + dx, y: self.y + dy }
    }

    /// The four orthogonal neighbours in expansion order: down, right, up,
    /// left.  Cells outside any bounds are included; callers filter.
    #[inline]
    pub fn neighbors(self) -> [Point; 4] {
        [
            self.offset(0, 1),
            self.offset(1, 0),
            self.offset(0, -1),
            self.offset(-1, 0),
        ]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Grid dimensions in cells.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// `true` if the grid has no cells (either dimension `<= 0`).
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Number of cells; zero for empty or negative dimensions.
    #[inline]
    pub fn area(self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.width as usize * self.height as usize
        }
    }

    #[inline]
    pub fn contains(self, point: Point) -> bool {
        point.within(self)
    }

    /// Row-major dense index of `point`, for scratch arrays of length
    /// [`area`](Self::area).  `point` must be inside the grid.
    #[inline]
    pub fn cell_index(self, point: Point) -> usize {
        debug_assert!(point.within(self), "cell {point} outside {self}");
        point.y as usize * self.width as usize + point.x as usize
    }

    /// Inverse of [`cell_index`](Self::cell_index).
    #[inline]
    pub fn cell_at(self, index: usize) -> Point {
        let width = self.width as usize;
        Point::new((index % width) as i32, (index / width) as i32)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
