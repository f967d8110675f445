//! Core domain types for tic-tac-toe.

use super::action::IllegalMoveError;
use super::invariants::check_state;
use super::position::Coordinate;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The symbol a side places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumString, strum::Display)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Mark X (always moves first).
    #[serde(alias = "x")]
    X,
    /// Mark O (moves second).
    #[serde(alias = "o")]
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: [`Board::place`] hands back a new board and
/// leaves the receiver untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from three rows of cells.
    pub fn from_rows(rows: [[Cell; 3]; 3]) -> Self {
        let mut cells = [Cell::Empty; 9];
        for (r, row) in rows.iter().enumerate() {
            cells[r * 3..r * 3 + 3].copy_from_slice(row);
        }
        Self { cells }
    }

    /// Gets the cell at a coordinate.
    pub fn get(&self, coord: Coordinate) -> Cell {
        self.cells[coord.to_index()]
    }

    /// True iff the addressed cell is empty.
    pub fn is_legal(&self, coord: Coordinate) -> bool {
        self.get(coord) == Cell::Empty
    }

    /// Returns a copy of this board with `mark` placed at `coord`.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMoveError::CellOccupied`] if the cell already holds a mark.
    pub fn place(&self, coord: Coordinate, mark: Mark) -> Result<Board, IllegalMoveError> {
        if !self.is_legal(coord) {
            return Err(IllegalMoveError::CellOccupied(coord));
        }
        let mut next = *self;
        next.cells[coord.to_index()] = Cell::Occupied(mark);
        Ok(next)
    }

    /// Empty coordinates in row-major order.
    pub fn empty_cells(&self) -> Vec<Coordinate> {
        Coordinate::ALL
            .iter()
            .copied()
            .filter(|&coord| self.is_legal(coord))
            .collect()
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Occupied(mark))
            .count()
    }

    /// True when no empty cell is left.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.chunks(3).enumerate() {
            for cell in row {
                let symbol = match cell {
                    Cell::Empty => ".".to_string(),
                    Cell::Occupied(mark) => mark.to_string(),
                };
                f.write_str(&symbol)?;
            }
            if i < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Outcome of a board, derived from its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Moves remain and nobody has three in a row.
    InProgress,
    /// A mark completed a line.
    Win(Mark),
    /// Board is full with no line.
    Draw,
}

impl GameResult {
    /// True for `Win` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    /// Returns the winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameResult::Win(mark) => Some(mark),
            GameResult::InProgress | GameResult::Draw => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::InProgress => write!(f, "In progress"),
            GameResult::Win(mark) => write!(f, "The winner is {}!", mark),
            GameResult::Draw => write!(f, "Draw."),
        }
    }
}

/// Complete game state: board, side to move, and the board's result.
///
/// A `GameState` is never mutated after construction. The engine returns
/// a fresh value for every accepted move. Deserialized states must pass
/// every invariant, so a stored state cannot claim a result its board
/// does not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    pub(super) board: Board,
    pub(super) turn: Mark,
    pub(super) result: GameResult,
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    board: Board,
    turn: Mark,
    result: GameResult,
}

impl TryFrom<RawGameState> for GameState {
    type Error = String;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = GameState {
            board: raw.board,
            turn: raw.turn,
            result: raw.result,
        };
        check_state(&state).map_err(|violations| {
            let reasons: Vec<_> = violations.into_iter().map(|v| v.description).collect();
            format!("Invalid game state: {}", reasons.join("; "))
        })?;
        Ok(state)
    }
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            result: GameResult::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the result derived from the board.
    pub fn result(&self) -> GameResult {
        self.result
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col).unwrap()
    }

    #[test]
    fn test_place_leaves_receiver_untouched() {
        let board = Board::new();
        let next = board.place(at(1, 1), Mark::X).unwrap();

        assert_eq!(board.get(at(1, 1)), Cell::Empty);
        assert_eq!(next.get(at(1, 1)), Cell::Occupied(Mark::X));
    }

    #[test]
    fn test_place_rejects_occupied() {
        let board = Board::new().place(at(0, 2), Mark::O).unwrap();
        assert_eq!(
            board.place(at(0, 2), Mark::X),
            Err(IllegalMoveError::CellOccupied(at(0, 2)))
        );
        assert!(!board.is_legal(at(0, 2)));
    }

    #[test]
    fn test_empty_cells_row_major() {
        let board = Board::new()
            .place(at(0, 0), Mark::X)
            .and_then(|b| b.place(at(1, 1), Mark::O))
            .unwrap();
        let empties = board.empty_cells();

        assert_eq!(empties.len(), 7);
        assert_eq!(empties[0], at(0, 1));
        assert_eq!(empties[6], at(2, 2));
        assert_eq!(board.count(Mark::X), 1);
        assert_eq!(board.count(Mark::O), 1);
    }

    #[test]
    fn test_display() {
        use Cell::{Empty as E, Occupied as P};
        let board = Board::from_rows([
            [P(Mark::X), E, E],
            [E, P(Mark::O), E],
            [E, E, P(Mark::X)],
        ]);
        assert_eq!(board.to_string(), "X..\n.O.\n..X");
    }

    #[test]
    fn test_deserialize_rejects_stale_result() {
        use Cell::{Empty as E, Occupied as P};
        let (x, o) = (P(Mark::X), P(Mark::O));
        let won = GameState {
            board: Board::from_rows([[x, x, x], [o, o, E], [E, E, E]]),
            turn: Mark::O,
            result: GameResult::Win(Mark::X),
        };
        let mut json = serde_json::to_value(won).unwrap();
        assert_eq!(serde_json::from_value::<GameState>(json.clone()).unwrap(), won);

        json["result"] = serde_json::json!("InProgress");
        let err = serde_json::from_value::<GameState>(json).unwrap_err();
        assert!(err.to_string().contains("Result is derived from the board"));
    }

    #[test]
    fn test_mark_parses_case_insensitive() {
        assert_eq!("x".parse::<Mark>().unwrap(), Mark::X);
        assert_eq!("O".parse::<Mark>().unwrap(), Mark::O);
        assert!("z".parse::<Mark>().is_err());
    }
}
