//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Coord, Marker};
use tracing::instrument;

/// The 8 winning triples as `(row, col)` pairs.
pub const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Returns true if `marker` fills any of the 8 triples.
#[instrument(skip(board))]
pub fn has_line(board: &Board, marker: Marker) -> bool {
    winning_line(board, marker).is_some()
}

/// Returns the first triple filled by `marker`, if any.
pub fn winning_line(board: &Board, marker: Marker) -> Option<[Coord; 3]> {
    let target = Some(Cell::Occupied(marker));
    LINES
        .iter()
        .find(|line| line.iter().all(|&(row, col)| board.get(row, col) == target))
        .and_then(|&[a, b, c]| {
            Some([
                Coord::new(a.0, a.1)?,
                Coord::new(b.0, b.1)?,
                Coord::new(c.0, c.1)?,
            ])
        })
}
