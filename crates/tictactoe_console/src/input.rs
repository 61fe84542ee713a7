//! Reading 1-based coordinates from a line-oriented reader.

use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use tracing::{debug, instrument};

/// Failure to obtain a number from the player.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum InputError {
    /// The line did not parse as an integer.
    #[display("Not a number: {:?}", input)]
    NotANumber {
        /// The offending line, trimmed.
        input: String,
    },

    /// The reader is exhausted.
    #[display("End of input")]
    EndOfInput,

    /// Reading or prompting failed.
    #[display("I/O error: {}", _0)]
    #[from]
    Io(std::io::Error),
}

/// Writes `prompt`, then reads one line and parses it as an integer.
///
/// # Errors
///
/// [`InputError::EndOfInput`] when the reader has no more lines,
/// [`InputError::NotANumber`] when the line is not an integer.
/// Integers too large for `i64` saturate, so they still read as numbers
/// (and land out of bounds).
#[instrument(skip(reader, writer))]
pub fn read_number<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> Result<i64, InputError> {
    let line = read_line(reader, writer, prompt)?;
    match line.parse::<i64>() {
        Ok(value) => Ok(value),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(InputError::NotANumber { input: line }),
        },
    }
}

/// Writes `prompt`, then reads one trimmed line.
///
/// Bytes that are not UTF-8 are replaced rather than failing the read; a
/// garbled line is bad input, not a broken stream.
///
/// # Errors
///
/// [`InputError::EndOfInput`] when the reader has no more lines.
pub fn read_line<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> Result<String, InputError> {
    write!(writer, "{}", prompt)?;
    writer.flush()?;

    let mut bytes = Vec::new();
    if reader.read_until(b'\n', &mut bytes)? == 0 {
        debug!("Reader exhausted");
        return Err(InputError::EndOfInput);
    }
    Ok(String::from_utf8_lossy(&bytes).trim().to_string())
}

/// Converts a 1-based human coordinate to the engine's 0-based index.
///
/// Values below 1 have no 0-based counterpart; they map to `usize::MAX`,
/// which the engine rejects as out of bounds like any other bad value.
pub fn to_index(value: i64) -> usize {
    usize::try_from(value.saturating_sub(1)).unwrap_or(usize::MAX)
}
