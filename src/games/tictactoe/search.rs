//! Bounded-depth adversarial search for the automated opponent.
//!
//! Negamax with alpha-beta pruning. Leaves are scored only by the terminal
//! utility of the judge: a win is `+1`, a loss `-1`, a draw or an exhausted
//! depth budget `0`. Equal utilities are ordered by ply distance so the
//! search prefers the quickest win and the slowest loss.

use super::rules::{Outcome, evaluate};
use super::{Board, Player, Position};
use std::cmp::Ordering;
use tracing::{debug, instrument};

/// Deepest useful search: a 3x3 board has nine cells.
pub const MAX_DEPTH: u8 = 9;

/// Score of a position from the perspective of the player to move.
#[derive(Debug, Clone, Copy)]
pub struct Score {
    /// Terminal utility: `+1`, `0` or `-1`.
    utility: i8,
    /// Plies until the outcome was reached.
    plies: u8,
}

impl Score {
    const BEST: Score = Score { utility: 1, plies: 0 };
    const WORST: Score = Score { utility: -1, plies: 0 };

    fn win(plies: u8) -> Self {
        Self { utility: 1, plies }
    }

    fn loss(plies: u8) -> Self {
        Self { utility: -1, plies }
    }

    fn neutral() -> Self {
        Self { utility: 0, plies: 0 }
    }

    /// Terminal utility of this score.
    pub fn utility(self) -> i8 {
        self.utility
    }

    /// Same outcome seen from the opponent's side.
    fn flip(self) -> Self {
        Self {
            utility: -self.utility,
            plies: self.plies,
        }
    }

    fn key(self) -> (i8, i16) {
        match self.utility {
            1 => (1, -i16::from(self.plies)),
            -1 => (-1, i16::from(self.plies)),
            _ => (0, 0),
        }
    }
}

impl PartialEq for Score {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Score {}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Chooses a move for `player` looking at most `max_depth` plies ahead.
///
/// Returns `None` only when the board has no empty cell. Among equally
/// scored moves the first in row-major order wins.
#[instrument(skip(board), fields(board = %board))]
pub fn choose_move(board: &Board, player: Player, max_depth: u8) -> Option<Position> {
    let moves = board.empty_positions();
    let first = *moves.first()?;
    let depth = max_depth.min(MAX_DEPTH);

    let mut nodes = 0usize;
    let mut best = (first, Score::WORST);
    let mut alpha = Score::WORST;

    for pos in moves {
        let mut child = *board;
        if child.place_mark(pos.row(), pos.col(), player).is_err() {
            continue;
        }
        let score = if depth == 0 {
            Score::neutral()
        } else {
            negamax(&child, player.opponent(), depth - 1, 1, Score::BEST.flip(), alpha.flip(), &mut nodes)
                .flip()
        };
        debug!(position = %pos, utility = score.utility, plies = score.plies, "Scored candidate");

        if score > best.1 {
            best = (pos, score);
        }
        if score > alpha {
            alpha = score;
        }
    }

    debug!(choice = %best.0, nodes, "Search complete");
    Some(best.0)
}

/// Scores `board` for `to_move`, the player about to place a mark.
///
/// `ply` counts the marks placed since the root.
fn negamax(
    board: &Board,
    to_move: Player,
    depth: u8,
    ply: u8,
    mut alpha: Score,
    beta: Score,
    nodes: &mut usize,
) -> Score {
    *nodes += 1;

    match evaluate(board) {
        Outcome::InProgress => {}
        Outcome::Draw => return Score::neutral(),
        outcome => {
            return if outcome.winner() == Some(to_move) {
                Score::win(ply)
            } else {
                Score::loss(ply)
            };
        }
    }

    if depth == 0 {
        return Score::neutral();
    }

    let mut best = Score::WORST;
    for pos in board.empty_positions() {
        let mut child = *board;
        if child.place_mark(pos.row(), pos.col(), to_move).is_err() {
            continue;
        }
        let score = negamax(&child, to_move.opponent(), depth - 1, ply + 1, beta.flip(), alpha.flip(), nodes)
            .flip();

        if score > best {
            best = score;
        }
        if best > alpha {
            alpha = best;
        }
        if alpha >= beta {
            break;
        }
    }
    best
}
