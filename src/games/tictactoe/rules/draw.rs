//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use super::win::check_winner;

/// Checks if the board is full (all cells marked).
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no decisive line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
