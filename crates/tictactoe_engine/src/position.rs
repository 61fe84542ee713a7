//! Board coordinates.

use super::types::{BOARD_SIZE, Board};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A validated 0-based `(row, col)` coordinate on the board.
///
/// Holding a `Coord` means both components are in `[0, 2]`; raw
/// coordinates from outside the engine go through [`Coord::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// All 9 coordinates in row-major order.
    pub const ALL: [Coord; 9] = [
        Coord { row: 0, col: 0 },
        Coord { row: 0, col: 1 },
        Coord { row: 0, col: 2 },
        Coord { row: 1, col: 0 },
        Coord { row: 1, col: 1 },
        Coord { row: 1, col: 2 },
        Coord { row: 2, col: 0 },
        Coord { row: 2, col: 1 },
        Coord { row: 2, col: 2 },
    ];

    /// Creates a coordinate, or `None` when either component is off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some(Self { row, col })
    }

    /// Creates a coordinate from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// Row, 0-based.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column, 0-based.
    pub fn col(self) -> usize {
        self.col
    }

    /// Filters coordinates by board state - returns only empty cells.
    #[instrument(skip(board))]
    pub fn empty_cells(board: &Board) -> Vec<Coord> {
        Self::ALL
            .iter()
            .copied()
            .filter(|c| board.is_empty(c.row, c.col))
            .collect()
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_off_board() {
        assert!(Coord::new(2, 2).is_some());
        assert!(Coord::new(3, 0).is_none());
        assert!(Coord::new(0, 3).is_none());
    }

    #[test]
    fn test_index_roundtrip() {
        for (i, coord) in Coord::ALL.iter().enumerate() {
            assert_eq!(coord.index(), i);
            assert_eq!(Coord::from_index(i), Some(*coord));
        }
        assert_eq!(Coord::from_index(9), None);
    }

    #[test]
    fn test_empty_cells_on_fresh_board() {
        assert_eq!(Coord::empty_cells(&Board::new()).len(), 9);
    }
}
