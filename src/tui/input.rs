//! Keyboard handling for the board.

use crossterm::event::KeyCode;
use strictly_tictactoe::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor.
    MoveCursor(Position),
    /// Activate a cell.
    Activate(Position),
    /// Start a new game.
    Restart,
    /// Leave the app.
    Quit,
    /// Key has no binding.
    Ignore,
}

/// Maps a key press to a command, given the cursor position.
pub fn command_for(cursor: Position, key: KeyCode) -> Command {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char('r') => Command::Restart,
        KeyCode::Enter | KeyCode::Char(' ') => Command::Activate(cursor),
        KeyCode::Char(c @ '1'..='9') => Position::from_label_or_number(&c.to_string())
            .map(Command::Activate)
            .unwrap_or(Command::Ignore),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Command::MoveCursor(move_cursor(cursor, key))
        }
        _ => Command::Ignore,
    }
}

/// Moves cursor based on arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = cursor.coords();
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_coords(row, col).unwrap_or(cursor)
}
