//! Game session: one board, one human, one automated opponent.

use crate::config::GameConfig;
use crate::games::tictactoe::invariants::{GameRecord, InvariantSet, TicTacToeInvariants};
use crate::games::tictactoe::{Board, Move, MoveError, Outcome, Player, Position, choose_move, evaluate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Result of activating a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activation {
    /// The game was already decided; the session started over.
    Reset,
    /// The human's mark went down, followed by the opponent's reply if the
    /// game was still open.
    Played {
        /// Where the human's mark landed.
        human: Position,
        /// Where the opponent answered, if it did.
        reply: Option<Position>,
        /// Outcome after both marks.
        outcome: Outcome,
    },
}

/// A single game between a human and the search opponent.
///
/// Owns the only board; moves are applied strictly one at a time.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    to_move: Player,
    human: Player,
    search_depth: u8,
    history: Vec<Move>,
}

impl GameSession {
    /// Creates a session from configuration.
    ///
    /// When the human plays second the opponent opens at once.
    #[instrument(skip(config))]
    pub fn new(config: &GameConfig) -> Self {
        Self::with_settings(*config.human_player(), *config.search_depth())
    }

    /// Creates a session for `human` with the given search depth.
    #[instrument]
    pub fn with_settings(human: Player, search_depth: u8) -> Self {
        info!(%human, search_depth, "Creating new game session");
        let mut session = Self {
            board: Board::new(),
            to_move: Player::One,
            human,
            search_depth,
            history: Vec::new(),
        };
        session.open_for_opponent();
        session
    }

    /// Clears the board and starts a new game with the same settings.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game session");
        self.board = Board::new();
        self.to_move = Player::One;
        self.history.clear();
        self.open_for_opponent();
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose mark goes down next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Player the human controls.
    pub fn human(&self) -> Player {
        self.human
    }

    /// Plies the opponent searches.
    pub fn search_depth(&self) -> u8 {
        self.search_depth
    }

    /// Marks placed so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Outcome of the current board, judged fresh.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    /// Places the mark of the player to move at `(row, col)`.
    ///
    /// Rejected once the game is decided; a rejected mark leaves the
    /// session untouched.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn place_mark(&mut self, row: usize, col: usize) -> Result<Position, MoveError> {
        if self.outcome().is_terminal() {
            warn!("Mark placed after the game ended");
            return Err(MoveError::GameOver);
        }

        let player = self.to_move;
        let pos = self.board.place_mark(row, col, player).inspect_err(|e| {
            warn!(error = %e, "Invalid move");
        })?;
        self.history.push(Move::new(player, pos));
        self.to_move = player.opponent();
        debug!(position = %pos, %player, "Mark placed");

        if cfg!(debug_assertions)
            && let Err(violations) = TicTacToeInvariants::check_all(&*self)
        {
            panic!("Session invariants violated: {:?}", violations);
        }

        Ok(pos)
    }

    /// Handles the human activating `(row, col)`.
    ///
    /// After a decided game any activation starts a new one. Otherwise the
    /// human's mark is placed and, if the game is still open, the opponent
    /// answers before this returns.
    #[instrument(skip(self))]
    pub fn on_cell_activated(&mut self, row: usize, col: usize) -> Result<Activation, MoveError> {
        if self.outcome().is_terminal() {
            self.reset();
            return Ok(Activation::Reset);
        }

        let human = self.place_mark(row, col)?;
        let reply = if self.outcome().is_terminal() {
            None
        } else {
            self.opponent_move()?
        };

        let outcome = self.outcome();
        info!(human = %human, reply = ?reply, %outcome, "Activation resolved");
        Ok(Activation::Played {
            human,
            reply,
            outcome,
        })
    }

    /// Status text for the presentation layer.
    pub fn status_message(&self) -> String {
        match self.outcome() {
            Outcome::InProgress if self.to_move == self.human => {
                format!("Your move ({})", self.human.symbol())
            }
            Outcome::InProgress => format!("{} is thinking...", self.to_move),
            outcome => outcome.to_string(),
        }
    }

    /// Lets the opponent move if it is its turn and cells remain.
    fn opponent_move(&mut self) -> Result<Option<Position>, MoveError> {
        let opponent = self.human.opponent();
        if self.to_move != opponent {
            return Ok(None);
        }

        match choose_move(&self.board, opponent, self.search_depth) {
            Some(pos) => {
                debug!(position = %pos, "Opponent replies");
                self.place_mark(pos.row(), pos.col()).map(Some)
            }
            None => Ok(None),
        }
    }

    fn open_for_opponent(&mut self) {
        if self.human == Player::Two {
            // Empty board: a move always exists and is always legal.
            if let Err(e) = self.opponent_move() {
                warn!(error = %e, "Opponent failed to open");
            }
        }
    }
}

impl GameRecord for GameSession {
    fn board(&self) -> &Board {
        &self.board
    }

    fn history(&self) -> &[Move] {
        &self.history
    }

    fn to_move(&self) -> Player {
        self.to_move
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
