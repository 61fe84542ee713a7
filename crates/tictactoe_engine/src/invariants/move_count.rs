//! Move count invariant: the board, the counter and the history agree.

use super::Invariant;
use crate::Game;

/// Invariant: occupied cells == move count == history length.
pub struct MoveCountInvariant;

impl Invariant<Game> for MoveCountInvariant {
    fn holds(game: &Game) -> bool {
        let occupied = game.board().occupied();
        occupied == game.move_count() && occupied == game.history().len()
    }

    fn description() -> &'static str {
        "Occupied cells equal the move count and history length"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Marker};

    #[test]
    fn test_holds_for_new_game() {
        assert!(MoveCountInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_holds_after_arbitrary_markers() {
        let mut game = Game::new();
        game.apply_move(1, 1, Marker::O).unwrap();
        game.apply_move(2, 1, Marker::O).unwrap();
        assert!(MoveCountInvariant::holds(&game));
    }

    #[test]
    fn test_detects_board_written_behind_counter() {
        let mut game = Game::new();
        game.board.set(0, 0, Cell::Occupied(Marker::X));
        assert!(!MoveCountInvariant::holds(&game));
    }
}
