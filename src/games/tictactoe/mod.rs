//! Tic-tac-toe board, judge and opponent search.

mod action;
pub mod invariants;
mod position;
pub mod rules;
pub mod search;
mod types;

pub use action::{Move, MoveError};
pub use position::Position;
pub use rules::{Outcome, evaluate};
pub use search::choose_move;
pub use types::{Board, BoardParseError, Cell, Player};
