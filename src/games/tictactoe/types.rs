//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use super::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Player {
    /// Player one (goes first, mark value `+1`).
    #[display("Player One")]
    One,
    /// Player two (goes second, mark value `-1`).
    #[display("Player Two")]
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Signed value this player's mark contributes to a line sum.
    pub fn mark_value(self) -> i8 {
        match self {
            Player::One => 1,
            Player::Two => -1,
        }
    }

    /// Board symbol for this player's mark.
    pub fn symbol(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }
}

impl FromStr for Player {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "one" | "1" | "x" => Ok(Player::One),
            "two" | "2" | "o" => Ok(Player::Two),
            other => Err(format!("Unknown player '{}' (expected one or two)", other)),
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player's mark.
    Marked(Player),
}

impl Cell {
    /// Trinary value of the cell: `0`, `+1` or `-1`.
    pub fn value(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::Marked(player) => player.mark_value(),
        }
    }

    /// Returns true if no mark occupies the cell.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// 3x3 tic-tac-toe board.
///
/// Cells only change through [`Board::place_mark`], so exactly the cells
/// explicitly set are non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[row][col]`.
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Gets the cell at `(row, col)`, or `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Checks if the cell at the position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Places `player`'s mark at `(row, col)`.
    ///
    /// Fails without touching the board when the indices are outside the
    /// grid or the cell is already marked.
    #[instrument(level = "trace", skip(self))]
    pub fn place_mark(&mut self, row: usize, col: usize, player: Player) -> Result<Position, MoveError> {
        let pos = Position::from_coords(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        if !self.is_empty(pos) {
            return Err(MoveError::OccupiedCell(pos));
        }
        self.cells[row][col] = Cell::Marked(player);
        Ok(pos)
    }

    /// Positions of all empty cells, in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// Returns true when every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Rows of trinary values, as the judge sees them.
    pub fn values(&self) -> [[i8; 3]; 3] {
        self.cells.map(|row| row.map(Cell::value))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            for cell in row {
                let symbol = match cell {
                    Cell::Empty => '.',
                    Cell::Marked(player) => player.symbol(),
                };
                write!(f, "{}", symbol)?;
            }
            if i < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// A character that is neither a mark, an empty marker nor a separator.
    #[display("Unexpected character '{}' in board", _0)]
    UnexpectedChar(#[error(not(source))] char),
    /// The text did not describe exactly nine cells.
    #[display("Board needs 9 cells, found {}", _0)]
    WrongCellCount(#[error(not(source))] usize),
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells: `X` for player one, `O` for player two and
    /// `.`, `-` or `_` for empty. Whitespace, `|` and `/` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for ch in s.chars() {
            let cell = match ch {
                'X' | 'x' => Cell::Marked(Player::One),
                'O' | 'o' => Cell::Marked(Player::Two),
                '.' | '-' | '_' => Cell::Empty,
                c if c.is_whitespace() || c == '|' || c == '/' => continue,
                c => return Err(BoardParseError::UnexpectedChar(c)),
            };
            cells.push(cell);
        }

        if cells.len() != 9 {
            return Err(BoardParseError::WrongCellCount(cells.len()));
        }

        let mut board = Board::new();
        for (pos, cell) in Position::ALL.iter().zip(cells) {
            board.cells[pos.row()][pos.col()] = cell;
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_positions().len(), 9);
        assert!(!board.is_full());
        assert_eq!(board.values(), [[0; 3]; 3]);
    }

    #[test]
    fn test_place_mark_sets_value() {
        let mut board = Board::new();
        let pos = board.place_mark(1, 2, Player::Two).unwrap();
        assert_eq!(pos, Position::MiddleRight);
        assert_eq!(board.get(pos), Cell::Marked(Player::Two));
        assert_eq!(board.values()[1][2], -1);
    }

    #[test]
    fn test_place_mark_rejects_out_of_bounds() {
        let mut board = Board::new();
        let result = board.place_mark(3, 0, Player::One);
        assert_eq!(result, Err(MoveError::OutOfBounds { row: 3, col: 0 }));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_cell_lookup_outside_grid() {
        let board = Board::new();
        assert_eq!(board.cell(0, 3), None);
        assert_eq!(board.cell(2, 2), Some(Cell::Empty));
    }

    #[test]
    fn test_parse_and_display() {
        let board: Board = "XO. / .X. / ..O".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Cell::Marked(Player::One));
        assert_eq!(board.get(Position::TopCenter), Cell::Marked(Player::Two));
        assert_eq!(board.to_string(), "XO.\n.X.\n..O");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "XO?......".parse::<Board>(),
            Err(BoardParseError::UnexpectedChar('?'))
        );
        assert_eq!(
            "XO".parse::<Board>(),
            Err(BoardParseError::WrongCellCount(2))
        );
    }

    #[test]
    fn test_player_from_str() {
        assert_eq!("one".parse::<Player>(), Ok(Player::One));
        assert_eq!("O".parse::<Player>(), Ok(Player::Two));
        assert!("three".parse::<Player>().is_err());
    }
}
