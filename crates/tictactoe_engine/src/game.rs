//! The board engine: one game's state, move validation and termination.

use crate::action::{Move, MoveError};
use crate::invariants::{Invariant, MoveCountInvariant};
use crate::position::Coord;
use crate::rules;
use crate::types::{Board, Cell, GameStatus, Marker};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

/// Cells on a full board.
const CELL_COUNT: usize = 9;

/// Tic-tac-toe game engine.
///
/// Owns the board exclusively for the duration of one game. Moves are
/// validated by [`Game::apply_move`]; turn alternation is driven by the
/// caller through [`Game::advance_turn`], or all at once by [`Game::play`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    current: Marker,
    move_count: usize,
    last_mover: Option<Marker>,
    history: Vec<Move>,
}

impl Game {
    /// Creates a fresh game: empty board, no moves, X to play.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Marker::X,
            move_count: 0,
            last_mover: None,
            history: Vec::new(),
        }
    }

    /// Clears the board and returns to X's turn.
    #[instrument(skip(self), fields(moves = self.move_count))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.current = Marker::X;
        self.move_count = 0;
        self.last_mover = None;
        self.history.clear();
        debug!("Game reset");
    }

    /// Places `player` at `(row, col)`.
    ///
    /// Does not advance the turn. The marker is taken as given; matching
    /// it to [`Game::current_player`] is the caller's protocol.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game is already won or drawn.
    /// - [`MoveError::OutOfBounds`] if `row` or `col` is outside `[0, 2]`.
    /// - [`MoveError::CellOccupied`] if the target cell holds a marker.
    ///
    /// The board is unchanged on error.
    #[instrument(skip(self), fields(moves = self.move_count))]
    pub fn apply_move(&mut self, row: usize, col: usize, player: Marker) -> Result<(), MoveError> {
        if self.is_terminal() {
            warn!("Move rejected: game is over");
            return Err(MoveError::GameOver);
        }

        let Some(coord) = Coord::new(row, col) else {
            warn!("Move rejected: out of bounds");
            return Err(MoveError::OutOfBounds { row, col });
        };

        if !self.board.is_empty(row, col) {
            warn!("Move rejected: cell occupied");
            return Err(MoveError::CellOccupied { row, col });
        }

        self.board.set(row, col, Cell::Occupied(player));
        self.move_count += 1;
        self.last_mover = Some(player);
        self.history.push(Move::new(player, coord));

        debug_assert!(
            MoveCountInvariant::holds(self),
            "{}",
            MoveCountInvariant::description()
        );

        debug!(moves = self.move_count, "Move accepted");
        Ok(())
    }

    /// Returns true iff `player` fills any of the 8 winning triples.
    #[instrument(skip(self))]
    pub fn check_win(&self, player: Marker) -> bool {
        rules::has_line(&self.board, player)
    }

    /// Returns true iff all 9 moves are made and the last mover has no line.
    ///
    /// Only the mover's marker is checked: a winning ninth move is a win.
    #[instrument(skip(self))]
    pub fn is_draw(&self) -> bool {
        if self.move_count != CELL_COUNT {
            return false;
        }
        debug_assert!(rules::is_full(&self.board));
        self.last_mover
            .is_some_and(|mover| !self.check_win(mover))
    }

    /// Returns true once either marker has a line or the game is drawn.
    #[instrument(skip(self))]
    pub fn is_terminal(&self) -> bool {
        Marker::iter().any(|marker| self.check_win(marker)) || self.is_draw()
    }

    /// Status as seen from the last mover.
    pub fn status(&self) -> GameStatus {
        match self.last_mover {
            Some(mover) if self.check_win(mover) => GameStatus::Won(mover),
            _ if self.is_draw() => GameStatus::Draw,
            _ => GameStatus::InProgress,
        }
    }

    /// Passes the turn to the other marker and returns it.
    #[instrument(skip(self))]
    pub fn advance_turn(&mut self) -> Marker {
        self.current = self.current.opponent();
        self.current
    }

    /// Plays one turn for the current marker.
    ///
    /// Applies the move, then passes the turn only if the move was
    /// accepted and the game is still in progress. A rejected move
    /// consumes nothing.
    ///
    /// # Errors
    ///
    /// Same as [`Game::apply_move`].
    #[instrument(skip(self), fields(player = %self.current))]
    pub fn play(&mut self, row: usize, col: usize) -> Result<GameStatus, MoveError> {
        self.apply_move(row, col, self.current)?;

        let status = self.status();
        match status {
            GameStatus::InProgress => {
                self.advance_turn();
            }
            GameStatus::Won(winner) => info!(%winner, moves = self.move_count, "Game won"),
            GameStatus::Draw => info!("Game drawn"),
        }
        Ok(status)
    }

    /// Read-only view of the board for rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Marker whose turn it is.
    pub fn current_player(&self) -> Marker {
        self.current
    }

    /// Number of accepted moves.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Marker placed by the most recent accepted move.
    pub fn last_mover(&self) -> Option<Marker> {
        self.last_mover
    }

    /// Accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.current_player(), Marker::X);
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(!game.is_terminal());
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_apply_move_does_not_advance_turn() {
        let mut game = Game::new();
        game.apply_move(1, 1, Marker::X).unwrap();
        assert_eq!(game.current_player(), Marker::X);
        assert_eq!(game.move_count(), 1);
        assert_eq!(game.board().get(1, 1), Some(Cell::Occupied(Marker::X)));
    }

    #[test]
    fn test_play_alternates() {
        let mut game = Game::new();
        assert_eq!(game.play(0, 0), Ok(GameStatus::InProgress));
        assert_eq!(game.current_player(), Marker::O);
        assert_eq!(game.play(1, 1), Ok(GameStatus::InProgress));
        assert_eq!(game.current_player(), Marker::X);
    }

    #[test]
    fn test_rejected_play_keeps_turn() {
        let mut game = Game::new();
        game.play(0, 0).unwrap();
        assert_eq!(
            game.play(0, 0),
            Err(MoveError::CellOccupied { row: 0, col: 0 })
        );
        assert_eq!(game.current_player(), Marker::O);
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn test_turn_stays_with_winner() {
        let mut game = Game::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            game.play(row, col).unwrap();
        }
        assert_eq!(game.play(0, 2), Ok(GameStatus::Won(Marker::X)));
        assert_eq!(game.current_player(), Marker::X);
        assert_eq!(game.play(2, 2), Err(MoveError::GameOver));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut game = Game::new();
        game.play(0, 0).unwrap();
        game.play(2, 2).unwrap();
        game.reset();
        assert_eq!(game, Game::new());
    }

    #[test]
    fn test_history_records_moves() {
        let mut game = Game::new();
        game.play(2, 1).unwrap();
        game.play(0, 0).unwrap();
        let history: Vec<_> = game
            .history()
            .iter()
            .map(|m| (m.marker, m.coord.row(), m.coord.col()))
            .collect();
        assert_eq!(history, vec![(Marker::X, 2, 1), (Marker::O, 0, 0)]);
        assert_eq!(game.last_mover(), Some(Marker::O));
    }
}
