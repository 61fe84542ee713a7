//! Board-fullness check used by draw detection.

use crate::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board is a draw only when the last mover has no line; see
/// [`Game::is_draw`](crate::Game::is_draw).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.iter().all(|cell| cell != Cell::Empty)
}
