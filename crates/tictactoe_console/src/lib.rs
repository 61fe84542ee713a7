//! Console and terminal UI driver for the tic-tac-toe board engine.
//!
//! The engine owns game state; everything here is input collection,
//! rendering and the play-again loop around it.
//!
//! - **Console**: line-based game on any reader/writer pair
//! - **TUI**: ratatui board with keyboard cursor
//! - **Settings**: optional TOML file with banner and replay preferences

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod console;
mod input;
mod logging;
mod session;
mod settings;

pub mod tui;

pub use cli::{Cli, Command};
pub use console::ConsoleSession;
pub use input::{InputError, read_number, to_index};
pub use logging::{env_filter, report_settings};
pub use session::{SessionSummary, outcome_message, rejection_message};
pub use settings::{ConfigError, Settings, SettingsSource};
