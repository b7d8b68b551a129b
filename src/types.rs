//! Shared types and enums used across PATCHGRID.
//! Includes the cardinal scan `Direction` used by the boundary-distance
//! scanner and as the output filename suffix.
use serde::{Deserialize, Serialize};

/// Cardinal direction a boundary-distance scan starts from.
///
/// `South` counts run lengths upward from the bottommost foreground cell of
/// each column, `North` downward from the topmost, `West` rightward from the
/// leftmost foreground cell of each row, and `East` leftward from the
/// rightmost.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Direction {
    South,
    North,
    West,
    East,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::West,
        Direction::North,
        Direction::South,
    ];

    /// Suffix appended to the input filename for this direction's raster.
    pub fn suffix(&self) -> &'static str {
        match self {
            Direction::South => "south",
            Direction::North => "north",
            Direction::West => "west",
            Direction::East => "east",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.suffix())
    }
}
