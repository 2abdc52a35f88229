//! 8x8 checkers board storage.
//!
//! The board knows nothing about legality. It stores cells and answers
//! questions about them; the rules modules decide what may change.

use super::square::{BOARD_SIZE, Square};
use super::types::{Cell, Piece, Player, Rank};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of men each side starts with.
pub const PIECES_PER_SIDE: usize = 12;

/// Error raised by direct board access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// A coordinate fell outside 0-7.
    #[display("Coordinate ({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
    },
    /// Pieces may only be placed on playable (dark) squares.
    #[display("Square {} is not a playable square", _0)]
    UnplayableSquare(#[error(not(source))] Square),
}

/// 8x8 board of cells, indexed `[row][col]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    /// Creates an empty board.
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// Creates the standard opening layout: twelve Light men on the playable
    /// squares of rows 0-2, twelve Dark men on rows 5-7.
    #[instrument]
    pub fn new() -> Self {
        let mut board = Self::empty();
        for sq in Square::playable() {
            let cell = match sq.row() {
                0..=2 => Cell::Occupied(Piece::man(Player::Light)),
                5..=7 => Cell::Occupied(Piece::man(Player::Dark)),
                _ => Cell::Empty,
            };
            board.set(sq, cell);
        }
        board
    }

    /// Builds a board from a grid of piece codes (0-4).
    ///
    /// Unknown codes read as empty. Pieces on unplayable squares are rejected.
    pub fn from_codes(codes: &[[u8; 8]; 8]) -> Result<Self, BoardError> {
        let mut board = Self::empty();
        for sq in Square::all() {
            let code = codes[sq.row() as usize][sq.col() as usize];
            let cell = Cell::from_code(code).unwrap_or(Cell::Empty);
            if !cell.is_empty() {
                board.place(sq.row().into(), sq.col().into(), cell)?;
            }
        }
        Ok(board)
    }

    /// Gets the cell at an in-bounds square.
    pub fn get(&self, sq: Square) -> Cell {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    /// Stores a cell at an in-bounds square without any checks.
    pub(crate) fn set(&mut self, sq: Square, cell: Cell) {
        self.cells[sq.row() as usize][sq.col() as usize] = cell;
    }

    /// Gets the cell at raw coordinates.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::OutOfBounds` when either coordinate is outside 0-7.
    pub fn cell_at(&self, row: i32, col: i32) -> Result<Cell, BoardError> {
        Ok(self.get(Self::square(row, col)?))
    }

    /// Places a cell at raw coordinates.
    ///
    /// Placing `Cell::Empty` is always allowed. Pieces are refused on
    /// unplayable squares.
    pub fn place(&mut self, row: i32, col: i32, cell: Cell) -> Result<(), BoardError> {
        let sq = Self::square(row, col)?;
        if !cell.is_empty() && !sq.is_playable() {
            return Err(BoardError::UnplayableSquare(sq));
        }
        self.set(sq, cell);
        Ok(())
    }

    /// Empties the square at raw coordinates.
    pub fn clear(&mut self, row: i32, col: i32) -> Result<(), BoardError> {
        self.place(row, col, Cell::Empty)
    }

    /// Owner of the piece at raw coordinates; `None` if empty or off-board.
    pub fn occupant_color(&self, row: i32, col: i32) -> Option<Player> {
        self.occupant(row, col).map(|p| p.color)
    }

    /// Rank of the piece at raw coordinates; `None` if empty or off-board.
    pub fn occupant_rank(&self, row: i32, col: i32) -> Option<Rank> {
        self.occupant(row, col).map(|p| p.rank)
    }

    fn occupant(&self, row: i32, col: i32) -> Option<Piece> {
        self.cell_at(row, col).ok().and_then(Cell::piece)
    }

    fn square(row: i32, col: i32) -> Result<Square, BoardError> {
        Square::new(row, col).ok_or(BoardError::OutOfBounds { row, col })
    }

    /// Squares holding pieces of `player`, in row-major order.
    pub fn squares_of(&self, player: Player) -> impl Iterator<Item = Square> + '_ {
        Square::playable().filter(move |sq| {
            self.get(*sq)
                .piece()
                .is_some_and(|piece| piece.color == player)
        })
    }

    /// Number of pieces `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.squares_of(player).count()
    }

    /// The board as a grid of piece codes.
    pub fn codes(&self) -> [[u8; 8]; 8] {
        let mut codes = [[0; 8]; 8];
        for sq in Square::all() {
            codes[sq.row() as usize][sq.col() as usize] = self.get(sq).code();
        }
        codes
    }

    /// Formats the board as a human-readable string.
    ///
    /// Row 0 is printed first; `l`/`L` are light men/kings, `d`/`D` dark.
    pub fn display(&self) -> String {
        let mut result = String::from("  0 1 2 3 4 5 6 7\n");
        for sq in Square::all() {
            if sq.col() == 0 {
                result.push_str(&sq.row().to_string());
            }
            result.push(' ');
            result.push(self.get(sq).glyph());
            if sq.col() == BOARD_SIZE - 1 {
                result.push('\n');
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}
