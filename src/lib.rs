//! Strictly Tic-Tac-Toe library - board judge and minimax opponent
//!
//! # Architecture
//!
//! - **Games**: the tic-tac-toe board, its judge and the opponent search
//! - **Session**: one game between a human and the opponent
//! - **Config**: TOML settings for sessions and the terminal UI
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Activation, GameSession, Outcome, Player};
//!
//! let mut session = GameSession::with_settings(Player::One, 5);
//! let activation = session.on_cell_activated(1, 1).unwrap();
//! assert!(matches!(
//!     activation,
//!     Activation::Played { outcome: Outcome::InProgress, reply: Some(_), .. }
//! ));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Session management
pub use session::{Activation, GameSession};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::invariants::{
    AlternatingTurnInvariant, GameRecord, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, NoDualWinnerInvariant, TicTacToeInvariants,
};
pub use games::tictactoe::rules::{LINES, Line, decisive_lines, line_sum};
pub use games::tictactoe::search::MAX_DEPTH;
pub use games::tictactoe::{
    Board, BoardParseError, Cell, Move, MoveError, Outcome, Player, Position, choose_move, evaluate,
};
