//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tictactoe_engine::Coord;

/// Moves the cursor one cell for an arrow key; stays put at the edges.
pub fn move_cursor(cursor: Coord, key: KeyCode) -> Coord {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Left => col.checked_sub(1).and_then(|col| Coord::new(row, col)),
        KeyCode::Right => Coord::new(row, col + 1),
        KeyCode::Up => row.checked_sub(1).and_then(|row| Coord::new(row, col)),
        KeyCode::Down => Coord::new(row + 1, col),
        _ => None,
    };
    target.unwrap_or(cursor)
}
