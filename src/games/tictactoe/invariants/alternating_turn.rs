//! Alternating turn invariant: players alternate One, Two, One, ...

use super::super::Player;
use super::{GameRecord, Invariant};

/// Invariant: Players alternate turns.
///
/// Move history must show One, Two, One, ... and the player to move must
/// follow the last entry.
pub struct AlternatingTurnInvariant;

impl<S: GameRecord> Invariant<S> for AlternatingTurnInvariant {
    fn holds(game: &S) -> bool {
        let history = game.history();

        if let Some(first) = history.first()
            && first.player != Player::One
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            Player::One
        } else {
            Player::Two
        };

        game.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (One, Two, One, ...)"
    }
}
