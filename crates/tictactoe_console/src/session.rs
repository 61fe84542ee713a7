//! Session bookkeeping and the player-facing messages shared by front ends.

use tictactoe_engine::{GameStatus, Marker, MoveError};
use tracing::{info, instrument};

/// Results of every finished game in one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Games won by X.
    pub x_wins: usize,
    /// Games won by O.
    pub o_wins: usize,
    /// Drawn games.
    pub draws: usize,
}

impl SessionSummary {
    /// Counts a finished game. In-progress statuses are ignored.
    #[instrument(skip(self))]
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Marker::X) => self.x_wins += 1,
            GameStatus::Won(Marker::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => return,
        }
        info!(?status, games = self.games(), "Game recorded");
    }

    /// Total finished games.
    pub fn games(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }
}

/// Announcement for a finished game, `None` while it is in progress.
pub fn outcome_message(status: GameStatus, banners: bool) -> Option<String> {
    let message = match (status, banners) {
        (GameStatus::InProgress, _) => return None,
        (GameStatus::Won(winner), true) => format!("🎉 Player {} wins! 🎉", winner),
        (GameStatus::Won(winner), false) => format!("Player {} wins!", winner),
        (GameStatus::Draw, true) => "🤝 It's a draw! 🤝".to_string(),
        (GameStatus::Draw, false) => "It's a draw!".to_string(),
    };
    Some(message)
}

/// What to tell the player when a move is rejected.
pub fn rejection_message(err: &MoveError) -> &'static str {
    match err {
        MoveError::OutOfBounds { .. } => "Invalid position! Use 1-3 for row and column.",
        MoveError::CellOccupied { .. } => "That position is already taken!",
        MoveError::GameOver => "The game is already over!",
    }
}
