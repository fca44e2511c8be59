//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use slide_puzzle_core::Position;

/// Moves the cursor one cell in the arrow direction, staying on the
/// board.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let row = cursor.row();
    let col = cursor.col();

    let moved = match key {
        KeyCode::Up if row > 0 => Position::from_row_col(row - 1, col),
        KeyCode::Down => Position::from_row_col(row + 1, col),
        KeyCode::Left if col > 0 => Position::from_row_col(row, col - 1),
        KeyCode::Right => Position::from_row_col(row, col + 1),
        _ => None,
    };

    moved.unwrap_or(cursor)
}
