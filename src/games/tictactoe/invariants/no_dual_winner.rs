//! No dual winner invariant: both players never hold a line at once.

use super::super::Player;
use super::super::rules::decisive_lines;
use super::{GameRecord, Invariant};

/// Invariant: Decisive lines all belong to the same player.
///
/// One player can complete two lines with a single mark, but a reachable
/// board never has decisive lines for both players.
pub struct NoDualWinnerInvariant;

impl<S: GameRecord> Invariant<S> for NoDualWinnerInvariant {
    fn holds(game: &S) -> bool {
        let lines = decisive_lines(game.board());
        let one = lines.iter().any(|(_, owner)| *owner == Player::One);
        let two = lines.iter().any(|(_, owner)| *owner == Player::Two);
        !(one && two)
    }

    fn description() -> &'static str {
        "At most one player holds a decisive line"
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::Record;
    use super::*;

    #[test]
    fn test_single_winner_holds() {
        let record = Record {
            board: "XXX/OO./...".parse().unwrap(),
            ..Record::default()
        };
        assert!(NoDualWinnerInvariant::holds(&record));
    }

    #[test]
    fn test_both_winners_fails() {
        let record = Record {
            board: "XXX/OOO/...".parse().unwrap(),
            ..Record::default()
        };
        assert!(!NoDualWinnerInvariant::holds(&record));
    }
}
