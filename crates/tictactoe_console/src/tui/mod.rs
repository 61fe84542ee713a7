//! Full-screen terminal UI.
//!
//! Same engine protocol as the console: the current marker plays at the
//! cursor, rejected moves leave the turn where it was.

mod input;
mod ui;

use crate::session::{SessionSummary, outcome_message, rejection_message};
use crate::settings::Settings;
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use tictactoe_engine::{Coord, Game, GameStatus};
use tracing::{debug, info, instrument, warn};

/// TUI state: the game, the cursor and the status line.
#[derive(Debug)]
pub struct App {
    game: Game,
    cursor: Coord,
    message: String,
    banners: bool,
    summary: SessionSummary,
    should_quit: bool,
}

impl App {
    /// Creates an app with a fresh game and the cursor in the center.
    pub fn new(banners: bool) -> Self {
        let game = Game::new();
        let message = turn_message(&game);
        Self {
            game,
            cursor: Coord::ALL[4],
            message,
            banners,
            summary: SessionSummary::default(),
            should_quit: false,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Status line text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Finished games so far.
    pub fn summary(&self) -> SessionSummary {
        self.summary
    }

    /// True once the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            KeyCode::Char(c) => {
                // Digits 1-9 address cells in row-major order.
                if let Some(coord) = c
                    .to_digit(10)
                    .and_then(|d| (d as usize).checked_sub(1))
                    .and_then(Coord::from_index)
                {
                    self.cursor = coord;
                    self.place(coord);
                }
            }
            other => self.cursor = input::move_cursor(self.cursor, other),
        }
    }

    /// Plays the current marker at `coord`.
    pub fn place(&mut self, coord: Coord) {
        match self.game.play(coord.row(), coord.col()) {
            Ok(GameStatus::InProgress) => self.message = turn_message(&self.game),
            Ok(status) => {
                self.summary.record(status);
                let outcome = outcome_message(status, self.banners).unwrap_or_default();
                self.message = format!("{} Press r to play again, q to quit.", outcome);
            }
            Err(err) => {
                warn!(%err, "Move rejected");
                self.message = rejection_message(&err).to_string();
            }
        }
    }

    /// Starts a new game; only allowed once the current one is over.
    fn restart(&mut self) {
        if !self.game.is_terminal() {
            debug!("Restart ignored: game in progress");
            return;
        }
        self.game.reset();
        self.cursor = Coord::ALL[4];
        self.message = turn_message(&self.game);
    }
}

fn turn_message(game: &Game) -> String {
    format!("Player {}'s turn", game.current_player())
}

/// Runs the TUI until the player quits.
///
/// # Errors
///
/// Fails on terminal I/O errors.
#[instrument(skip(settings))]
pub fn run(settings: &Settings) -> Result<SessionSummary> {
    info!("Starting TUI");
    let mut terminal = ratatui::init();
    let mut app = App::new(*settings.banners());

    let result = run_app(&mut terminal, &mut app);
    ratatui::restore();
    result?;

    info!(summary = ?app.summary(), "TUI closed");
    Ok(app.summary())
}

fn run_app(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }
    Ok(())
}
