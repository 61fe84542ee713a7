//! Command-line interface for the tic-tac-toe driver.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-Tac-Toe - two players, one keyboard
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (defaults are used if it doesn't exist)
    #[arg(short, long, default_value = "tictactoe.toml", global = true)]
    pub config: PathBuf,

    /// Print plain win/draw messages instead of emoji banners
    #[arg(long, global = true)]
    pub no_banners: bool,

    /// Subcommand to run (console if omitted)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available front ends
#[derive(Subcommand, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Command {
    /// Line-based game: type row and column numbers
    #[default]
    Console,

    /// Full-screen board: arrow keys and Enter
    Tui,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_console() {
        let cli = Cli::parse_from(["tictactoe"]);
        assert_eq!(cli.command.unwrap_or_default(), Command::Console);
        assert_eq!(cli.config, PathBuf::from("tictactoe.toml"));
        assert!(!cli.no_banners);
    }

    #[test]
    fn test_tui_with_global_flags() {
        let cli = Cli::parse_from(["tictactoe", "tui", "--no-banners", "-c", "alt.toml"]);
        assert_eq!(cli.command, Some(Command::Tui));
        assert_eq!(cli.config, PathBuf::from("alt.toml"));
        assert!(cli.no_banners);
    }
}
