//! Line-based game loop: prompts, re-prompts and the play-again question.

use crate::input::{InputError, read_line, read_number, to_index};
use crate::session::{SessionSummary, outcome_message, rejection_message};
use crate::settings::Settings;
use std::io::{BufRead, Write};
use tictactoe_engine::{Game, GameStatus};
use tracing::{info, instrument, warn};

/// One console session: any number of games on a single reader/writer pair.
///
/// Generic over the streams so the same loop drives stdin/stdout and
/// in-memory buffers.
pub struct ConsoleSession<R, W> {
    reader: R,
    writer: W,
    game: Game,
    banners: bool,
    ask_play_again: bool,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    /// Creates a session with a fresh game.
    pub fn new(reader: R, writer: W, settings: &Settings) -> Self {
        Self {
            reader,
            writer,
            game: Game::new(),
            banners: *settings.banners(),
            ask_play_again: *settings.ask_play_again(),
        }
    }

    /// Plays games until the player declines a rematch or input runs out.
    ///
    /// # Errors
    ///
    /// Fails only on I/O errors from the underlying streams.
    #[instrument(skip(self))]
    pub fn run(mut self) -> anyhow::Result<SessionSummary> {
        let mut summary = SessionSummary::default();

        writeln!(self.writer, "=== Tic-Tac-Toe Game ===")?;
        writeln!(self.writer, "Players take turns placing X and O")?;
        writeln!(self.writer, "Enter row and column (1-3) to place your mark\n")?;

        loop {
            self.game.reset();

            let Some(status) = self.play_one()? else {
                info!("Input ended mid-game");
                break;
            };
            summary.record(status);

            if !self.ask_play_again || !self.play_again()? {
                break;
            }
        }

        writeln!(self.writer, "\nThanks for playing!")?;
        self.writer.flush()?;
        info!(?summary, "Session finished");
        Ok(summary)
    }

    /// Plays one game to a win or draw; `None` if input ran out first.
    fn play_one(&mut self) -> anyhow::Result<Option<GameStatus>> {
        loop {
            writeln!(self.writer, "\n{}", self.game.board())?;
            writeln!(self.writer, "\nPlayer {}'s turn", self.game.current_player())?;

            let status = loop {
                let Some(row) = self.read_coordinate("Enter row (1-3): ")? else {
                    return Ok(None);
                };
                let Some(col) = self.read_coordinate("Enter column (1-3): ")? else {
                    return Ok(None);
                };

                match self.game.play(row, col) {
                    Ok(status) => break status,
                    Err(err) => {
                        warn!(%err, "Move rejected");
                        writeln!(self.writer, "{}", rejection_message(&err))?;
                    }
                }
            };

            if let Some(message) = outcome_message(status, self.banners) {
                writeln!(self.writer, "\n{}", self.game.board())?;
                writeln!(self.writer, "\n{}", message)?;
                return Ok(Some(status));
            }
        }
    }

    /// Reads one 1-based coordinate, re-prompting until it is a number.
    fn read_coordinate(&mut self, prompt: &str) -> anyhow::Result<Option<usize>> {
        loop {
            match read_number(&mut self.reader, &mut self.writer, prompt) {
                Ok(value) => return Ok(Some(to_index(value))),
                Err(InputError::NotANumber { input }) => {
                    warn!(%input, "Non-numeric coordinate");
                    writeln!(self.writer, "Please enter a number.")?;
                }
                Err(InputError::EndOfInput) => return Ok(None),
                Err(err @ InputError::Io(_)) => return Err(err.into()),
            }
        }
    }

    fn play_again(&mut self) -> anyhow::Result<bool> {
        match read_line(&mut self.reader, &mut self.writer, "\nPlay again? (yes/no): ") {
            Ok(answer) => Ok(answer.eq_ignore_ascii_case("yes")),
            Err(InputError::EndOfInput) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}
