//! Move records and move errors.

use super::{Coord, Marker};
use serde::{Deserialize, Serialize};

/// An accepted move: a marker placed at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The marker that was placed.
    pub marker: Marker,
    /// Where it was placed.
    pub coord: Coord,
}

impl Move {
    /// Creates a new move.
    pub fn new(marker: Marker, coord: Coord) -> Self {
        Self { marker, coord }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.marker, self.coord)
    }
}

/// Reason a move attempt was rejected.
///
/// All variants are recoverable: the board is left unchanged and the
/// caller may ask for another move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Row or column falls outside `[0, 2]`.
    #[display("Position ({}, {}) is out of bounds", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a marker.
    #[display("Cell ({}, {}) is already occupied", row, col)]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,
}
