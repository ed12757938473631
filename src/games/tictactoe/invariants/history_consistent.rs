//! History consistency invariant: replaying the history rebuilds the board.

use super::super::Board;
use super::{GameRecord, Invariant};

/// Invariant: The board is exactly the replay of the move history.
///
/// Every mark has one history entry, no cell is written twice, and no
/// cell is filled without a move.
pub struct HistoryConsistentInvariant;

impl<S: GameRecord> Invariant<S> for HistoryConsistentInvariant {
    fn holds(game: &S) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            let pos = mov.position;
            if reconstructed
                .place_mark(pos.row(), pos.col(), mov.player)
                .is_err()
            {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board matches a replay of the move history"
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::Record;
    use super::*;
    use crate::games::tictactoe::{Move, Player, Position};

    #[test]
    fn test_played_game_holds() {
        let record = Record::played(&[Position::Center, Position::TopLeft, Position::BottomRight]);
        assert!(HistoryConsistentInvariant::holds(&record));
    }

    #[test]
    fn test_overwritten_cell_fails() {
        let mut record = Record::played(&[Position::Center]);
        record.history.push(Move::new(Player::Two, Position::Center));
        assert!(!HistoryConsistentInvariant::holds(&record));
    }

    #[test]
    fn test_missing_history_fails() {
        let mut record = Record::played(&[Position::Center]);
        record.history.clear();
        assert!(!HistoryConsistentInvariant::holds(&record));
    }
}
