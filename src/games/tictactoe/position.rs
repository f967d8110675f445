//! Cell addressing for the 3x3 board.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A (row, column) address into the board.
///
/// Both components are always in `0..3`; the only ways to build one are
/// the checked constructors below, so an out-of-range coordinate can never
/// reach the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    /// All 9 coordinates in row-major order.
    ///
    /// Strategies scan in this order, so it doubles as the tie-break.
    pub const ALL: [Coordinate; 9] = [
        Coordinate { row: 0, col: 0 },
        Coordinate { row: 0, col: 1 },
        Coordinate { row: 0, col: 2 },
        Coordinate { row: 1, col: 0 },
        Coordinate { row: 1, col: 1 },
        Coordinate { row: 1, col: 2 },
        Coordinate { row: 2, col: 0 },
        Coordinate { row: 2, col: 1 },
        Coordinate { row: 2, col: 2 },
    ];

    /// Creates a coordinate, or `None` if either component is outside `0..3`.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Creates a coordinate from a row-major board index (0-8).
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Converts to a row-major board index (0-8).
    pub fn to_index(self) -> usize {
        self.row as usize * 3 + self.col as usize
    }

    /// Row (0-2).
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column (0-2).
    pub fn col(self) -> usize {
        self.col as usize
    }
}

impl TryFrom<(u8, u8)> for Coordinate {
    type Error = String;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Self::new(row as usize, col as usize)
            .ok_or_else(|| format!("Coordinate ({}, {}) is off the board", row, col))
    }
}

impl From<Coordinate> for (u8, u8) {
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
