//! Tic-tac-toe board engine.
//!
//! Pure game state with no I/O: a 3×3 grid of cells, move validation,
//! win and draw detection, and the X-then-O turn protocol.
//!
//! # Architecture
//!
//! - **Types**: markers, cells, the board and game status
//! - **Rules**: the 8 winning triples and board-fullness checks
//! - **Invariants**: properties that hold after every accepted move
//! - **Game**: the engine that owns one board for the duration of a game
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Game, GameStatus, Marker};
//!
//! let mut game = Game::new();
//! game.play(0, 0)?; // X
//! game.play(1, 1)?; // O
//! game.play(0, 1)?; // X
//! game.play(2, 2)?; // O
//! let status = game.play(0, 2)?; // X completes the top row
//!
//! assert_eq!(status, GameStatus::Won(Marker::X));
//! assert!(game.is_terminal());
//! # Ok::<(), tictactoe_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod position;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use game::Game;
pub use position::Coord;
pub use types::{BOARD_SIZE, Board, Cell, GameStatus, Marker};
