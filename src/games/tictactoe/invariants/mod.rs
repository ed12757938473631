//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold throughout a game.
//! They are checked after every mark in debug builds and are testable on
//! their own.

pub mod alternating_turn;
pub mod history_consistent;
pub mod no_dual_winner;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use no_dual_winner::NoDualWinnerInvariant;

use super::{Board, Move, Player};

/// Read access to a game in play, as seen by the invariants.
pub trait GameRecord {
    /// Current board.
    fn board(&self) -> &Board;
    /// Marks placed so far, oldest first.
    fn history(&self) -> &[Move];
    /// Player whose mark goes down next.
    fn to_move(&self) -> Player;
}

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All tic-tac-toe invariants as a composable set.
pub type TicTacToeInvariants = (
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
    NoDualWinnerInvariant,
);

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Bare record for exercising invariants without a session.
    #[derive(Debug, Clone, Default)]
    pub struct Record {
        pub board: Board,
        pub history: Vec<Move>,
        pub to_move: Option<Player>,
    }

    impl Record {
        /// Plays `moves` in order, alternating from player one.
        pub fn played(moves: &[super::super::Position]) -> Self {
            let mut record = Self::default();
            let mut player = Player::One;
            for &pos in moves {
                record
                    .board
                    .place_mark(pos.row(), pos.col(), player)
                    .expect("legal move");
                record.history.push(Move::new(player, pos));
                player = player.opponent();
            }
            record.to_move = Some(player);
            record
        }
    }

    impl GameRecord for Record {
        fn board(&self) -> &Board {
            &self.board
        }

        fn history(&self) -> &[Move] {
            &self.history
        }

        fn to_move(&self) -> Player {
            self.to_move.unwrap_or(Player::One)
        }
    }
}
