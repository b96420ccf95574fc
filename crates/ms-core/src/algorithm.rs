//! Path-search algorithm selector shared by the search engine, the
//! dispatcher and the front-end.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// Which search runs for every mission request.
///
/// The discriminants are the numeric codes accepted on the command line
/// (`0` = greedy, `1` = A*).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathAlgorithm {
    /// Cheap, non-optimal neighbour-by-neighbour walk.  May fail even when a
    /// path exists.
    Greedy = 0,
    /// Shortest path on the 4-connected grid.
    #[default]
    AStar = 1,
}

impl PathAlgorithm {
    pub const ALL: [PathAlgorithm; 2] = [PathAlgorithm::Greedy, PathAlgorithm::AStar];

    pub fn as_str(self) -> &'static str {
        match self {
            PathAlgorithm::Greedy => "greedy",
            PathAlgorithm::AStar  => "astar",
        }
    }
}

impl fmt::Display for PathAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PathAlgorithm {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "greedy" | "0"        => Ok(PathAlgorithm::Greedy),
            "astar" | "a*" | "1"  => Ok(PathAlgorithm::AStar),
            other                 => Err(CoreError::UnknownAlgorithm(other.to_owned())),
        }
    }
}
