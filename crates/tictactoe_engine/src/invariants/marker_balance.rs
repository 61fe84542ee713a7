//! Marker balance invariant: X never trails O, and never leads by more than one.

use super::Invariant;
use crate::{Game, Marker};

/// Invariant: after `n` moves X holds at most `ceil(n/2)` cells and O at
/// most `floor(n/2)`.
///
/// Holds for alternating play starting with X. [`Game::apply_move`] takes
/// the marker as given, so a caller laying out arbitrary positions can
/// break it without breaking the engine.
pub struct MarkerBalanceInvariant;

impl Invariant<Game> for MarkerBalanceInvariant {
    fn holds(game: &Game) -> bool {
        let n = game.move_count();
        let board = game.board();
        board.count(Marker::X) <= n.div_ceil(2) && board.count(Marker::O) <= n / 2
    }

    fn description() -> &'static str {
        "X holds at most ceil(n/2) cells and O at most floor(n/2)"
    }
}
