//! Core domain types for checkers.
//!
//! Pieces travel across the process boundary as small integer codes:
//!
//! | code | meaning    |
//! |------|------------|
//! | 0    | empty      |
//! | 1    | light man  |
//! | 2    | light king |
//! | 3    | dark man   |
//! | 4    | dark king  |
//!
//! A player is identified by the code of their men (1 or 3).

use serde::{Deserialize, Serialize};

/// A side in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum Player {
    /// Light moves first and starts on rows 0-2.
    Light,
    /// Dark starts on rows 5-7.
    Dark,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Light => Player::Dark,
            Player::Dark => Player::Light,
        }
    }

    /// Row direction a man of this player moves in.
    pub fn forward(self) -> i8 {
        match self {
            Player::Light => 1,
            Player::Dark => -1,
        }
    }

    /// Row on which this player's men are promoted.
    pub fn promotion_row(self) -> u8 {
        match self {
            Player::Light => 7,
            Player::Dark => 0,
        }
    }

    /// Player code (the code of this player's men).
    pub fn code(self) -> u8 {
        match self {
            Player::Light => 1,
            Player::Dark => 3,
        }
    }

    /// Parses a player code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Player::Light),
            3 => Some(Player::Dark),
            _ => None,
        }
    }
}

/// Rank of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Rank {
    /// Moves and captures forward only.
    Man,
    /// Moves and captures in all four diagonal directions.
    King,
}

/// A piece on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    /// Owner of the piece.
    pub color: Player,
    /// Man or king.
    pub rank: Rank,
}

impl Piece {
    /// Creates a man for the given player.
    pub fn man(color: Player) -> Self {
        Self {
            color,
            rank: Rank::Man,
        }
    }

    /// Creates a king for the given player.
    pub fn king(color: Player) -> Self {
        Self {
            color,
            rank: Rank::King,
        }
    }

    /// Returns true if this piece is a king.
    pub fn is_king(&self) -> bool {
        self.rank == Rank::King
    }

    /// Row directions this piece may travel in.
    ///
    /// Men only go forward unless `backward` is set, which the capture rules
    /// use when men are allowed to jump backward.
    pub fn row_directions(&self, backward: bool) -> &'static [i8] {
        match (self.rank, self.color, backward) {
            (Rank::King, _, _) | (Rank::Man, _, true) => &[1, -1],
            (Rank::Man, Player::Light, false) => &[1],
            (Rank::Man, Player::Dark, false) => &[-1],
        }
    }

    /// The same piece after promotion.
    pub fn crowned(self) -> Self {
        Self::king(self.color)
    }
}

/// A cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nothing on this square.
    #[default]
    Empty,
    /// A piece sits here.
    Occupied(Piece),
}

impl Cell {
    /// Returns the piece on this cell, if any.
    pub fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(piece),
        }
    }

    /// Returns true if nothing occupies this cell.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Piece code of this cell (0-4).
    pub fn code(self) -> u8 {
        match self.piece() {
            None => 0,
            Some(piece) => {
                let promoted = u8::from(piece.is_king());
                piece.color.code() + promoted
            }
        }
    }

    /// Parses a piece code (0-4).
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Occupied(Piece::man(Player::Light))),
            2 => Some(Cell::Occupied(Piece::king(Player::Light))),
            3 => Some(Cell::Occupied(Piece::man(Player::Dark))),
            4 => Some(Cell::Occupied(Piece::king(Player::Dark))),
            _ => None,
        }
    }

    /// Single-character glyph for text rendering.
    pub fn glyph(self) -> char {
        match self.piece() {
            None => '.',
            Some(Piece {
                color: Player::Light,
                rank: Rank::Man,
            }) => 'l',
            Some(Piece {
                color: Player::Light,
                rank: Rank::King,
            }) => 'L',
            Some(Piece {
                color: Player::Dark,
                rank: Rank::Man,
            }) => 'd',
            Some(Piece {
                color: Player::Dark,
                rank: Rank::King,
            }) => 'D',
        }
    }
}

impl From<Piece> for Cell {
    fn from(piece: Piece) -> Self {
        Cell::Occupied(piece)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_codes_match_boundary_convention() {
        assert_eq!(Cell::Empty.code(), 0);
        assert_eq!(Cell::from(Piece::man(Player::Light)).code(), 1);
        assert_eq!(Cell::from(Piece::king(Player::Light)).code(), 2);
        assert_eq!(Cell::from(Piece::man(Player::Dark)).code(), 3);
        assert_eq!(Cell::from(Piece::king(Player::Dark)).code(), 4);
    }

    #[test]
    fn test_codes_parse_back() {
        for code in 0..=4 {
            let cell = Cell::from_code(code).expect("valid code");
            assert_eq!(cell.code(), code);
        }
        assert_eq!(Cell::from_code(5), None);
    }

    #[test]
    fn test_player_codes() {
        assert_eq!(Player::Light.code(), 1);
        assert_eq!(Player::Dark.code(), 3);
        assert_eq!(Player::from_code(3), Some(Player::Dark));
        assert_eq!(Player::from_code(2), None);
    }

    #[test]
    fn test_men_move_toward_opponent() {
        assert_eq!(Piece::man(Player::Light).row_directions(false), &[1]);
        assert_eq!(Piece::man(Player::Dark).row_directions(false), &[-1]);
        assert_eq!(Piece::man(Player::Dark).row_directions(true), &[1, -1]);
        assert_eq!(Piece::king(Player::Light).row_directions(false), &[1, -1]);
    }

    #[test]
    fn test_promotion_rows_are_opposite_back_ranks() {
        assert_eq!(Player::Light.promotion_row(), 7);
        assert_eq!(Player::Dark.promotion_row(), 0);
    }
}
