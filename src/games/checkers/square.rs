//! Board coordinates.

use serde::{Deserialize, Serialize};

/// Number of rows and columns on the board.
pub const BOARD_SIZE: u8 = 8;

/// A coordinate on the 8x8 board, always in bounds.
///
/// Row 0 is Light's back rank, row 7 is Dark's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Creates a square from raw coordinates, returning `None` when either
    /// coordinate falls outside 0-7.
    pub fn new(row: i32, col: i32) -> Option<Self> {
        let in_range = |v: i32| (0..i32::from(BOARD_SIZE)).contains(&v);
        if in_range(row) && in_range(col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Row index (0-7).
    pub fn row(self) -> u8 {
        self.row
    }

    /// Column index (0-7).
    pub fn col(self) -> u8 {
        self.col
    }

    /// Pieces may only stand on squares where `row + col` is odd.
    pub fn is_playable(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// The square `(d_row, d_col)` away, if it is on the board.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::new(
            i32::from(self.row) + i32::from(d_row),
            i32::from(self.col) + i32::from(d_col),
        )
    }

    /// Signed row and column distance from `self` to `other`.
    pub fn delta(self, other: Square) -> (i8, i8) {
        (
            other.row as i8 - self.row as i8,
            other.col as i8 - self.col as i8,
        )
    }

    /// Midpoint between two squares, as integer division would give it.
    pub fn midpoint(self, other: Square) -> Square {
        Square {
            row: (self.row + other.row) / 2,
            col: (self.col + other.col) / 2,
        }
    }

    /// Iterates over every square in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }

    /// Iterates over the 32 playable squares in row-major order.
    pub fn playable() -> impl Iterator<Item = Square> {
        Self::all().filter(|sq| sq.is_playable())
    }
}

impl TryFrom<(i32, i32)> for Square {
    type Error = super::MoveError;

    fn try_from((row, col): (i32, i32)) -> Result<Self, Self::Error> {
        Square::new(row, col).ok_or(super::MoveError::OutOfBounds { row, col })
    }
}

impl From<Square> for (i32, i32) {
    fn from(sq: Square) -> Self {
        (i32::from(sq.row), i32::from(sq.col))
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
