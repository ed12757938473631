//! Game rules for tic-tac-toe.
//!
//! Pure functions judging a board. The outcome is computed fresh on every
//! query and never stored, so it always agrees with the board.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Line, check_winner, decisive_lines, line_owner, line_sum};

use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Outcome of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No decisive line and at least one empty cell.
    InProgress,
    /// Player one holds a line.
    PlayerOneWins,
    /// Player two holds a line.
    PlayerTwoWins,
    /// Every cell marked and no decisive line.
    Draw,
}

impl Outcome {
    /// The winning outcome for `player`.
    pub fn win_for(player: Player) -> Self {
        match player {
            Player::One => Outcome::PlayerOneWins,
            Player::Two => Outcome::PlayerTwoWins,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::PlayerOneWins => Some(Player::One),
            Outcome::PlayerTwoWins => Some(Player::Two),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Terminal outcomes are absorbing: no further marks are accepted.
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::PlayerOneWins => write!(f, "Player One wins"),
            Outcome::PlayerTwoWins => write!(f, "Player Two wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Judges the board.
///
/// Examines all eight lines before concluding the game is not decided.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        trace!(%winner, "Decisive line found");
        return Outcome::win_for(winner);
    }

    if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().expect("valid board")
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_player_one_top_row() {
        let mut b = Board::new();
        for col in 0..3 {
            b.place_mark(0, col, Player::One).unwrap();
        }
        assert_eq!(evaluate(&b), Outcome::PlayerOneWins);
    }

    #[test]
    fn test_player_two_main_diagonal() {
        let mut b = Board::new();
        for i in 0..3 {
            b.place_mark(i, i, Player::Two).unwrap();
        }
        assert_eq!(evaluate(&b), Outcome::PlayerTwoWins);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        assert_eq!(evaluate(&board("XOX/XOO/OXX")), Outcome::Draw);
    }

    #[test]
    fn test_win_on_last_cell_is_not_draw() {
        assert_eq!(evaluate(&board("XOX/OXO/OXX")), Outcome::PlayerOneWins);
    }

    #[test]
    fn test_win_found_on_last_line_checked() {
        assert_eq!(evaluate(&board("..O/.O./O..")), Outcome::PlayerTwoWins);
    }

    #[test]
    fn test_outcome_helpers() {
        assert_eq!(Outcome::win_for(Player::Two).winner(), Some(Player::Two));
        assert!(Outcome::Draw.is_terminal());
        assert!(!Outcome::InProgress.is_terminal());
        assert_eq!(Outcome::Draw.winner(), None);
    }
}
