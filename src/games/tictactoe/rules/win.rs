//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position};

/// One of the eight cell triples checked for a win.
pub type Line = [Position; 3];

/// Rows, then columns, then diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Sum of the trinary values along a line, in `-3..=3`.
pub fn line_sum(board: &Board, line: &Line) -> i8 {
    line.iter().map(|&pos| board.get(pos).value()).sum()
}

/// The player owning a line, if the line sums to `+3` or `-3`.
///
/// Each cell contributes at most one unit, so magnitude 3 needs three
/// marks of the same sign.
pub fn line_owner(board: &Board, line: &Line) -> Option<Player> {
    match line_sum(board, line) {
        3 => Some(Player::One),
        -3 => Some(Player::Two),
        _ => None,
    }
}

/// Every decisive line on the board together with its owner.
pub fn decisive_lines(board: &Board) -> Vec<(Line, Player)> {
    LINES
        .iter()
        .filter_map(|line| line_owner(board, line).map(|owner| (*line, owner)))
        .collect()
}

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first decisive line in row, column, diagonal
/// order.
pub fn check_winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|line| line_owner(board, line))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().expect("valid board")
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
        assert!(decisive_lines(&Board::new()).is_empty());
    }

    #[test]
    fn test_winner_top_row() {
        assert_eq!(check_winner(&board("XXX......")), Some(Player::One));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        assert_eq!(check_winner(&board("..O.O.O..")), Some(Player::Two));
    }

    #[test]
    fn test_mixed_line_is_not_decisive() {
        let b = board("XXO......");
        assert_eq!(line_sum(&b, &LINES[0]), 1);
        assert_eq!(line_owner(&b, &LINES[0]), None);
    }

    #[test]
    fn test_double_line_same_owner() {
        // Completing a fork wins on a row and a column at once.
        let b = board("XXX/XOO/XO.");
        let lines = decisive_lines(&b);
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|(_, owner)| *owner == Player::One));
    }
}
