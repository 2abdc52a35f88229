//! First-class action types for checkers.
//!
//! A move is the player's intent, expressed as a source and destination
//! square. It can be classified and validated before anything is applied.

use super::phases::Phase;
use super::square::Square;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move from one square to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Square the piece leaves.
    pub from: Square,
    /// Square the piece lands on.
    pub to: Square,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// Creates a move from raw coordinate pairs.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::OutOfBounds` for the first coordinate outside 0-7.
    pub fn from_coords(from: (i32, i32), to: (i32, i32)) -> Result<Self, MoveError> {
        Ok(Self::new(Square::try_from(from)?, Square::try_from(to)?))
    }

    /// Classifies the move by its shape alone, ignoring board contents.
    pub fn kind(&self) -> Option<MoveKind> {
        let (d_row, d_col) = self.from.delta(self.to);
        match (d_row.abs(), d_col.abs()) {
            (1, 1) => Some(MoveKind::Step),
            (2, 2) => Some(MoveKind::Jump),
            _ => None,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{},{}-{},{}",
            self.from.row(),
            self.from.col(),
            self.to.row(),
            self.to.col()
        )
    }
}

/// Shape of a legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum MoveKind {
    /// One diagonal square, no capture.
    Step,
    /// Two diagonal squares over an opposing piece, which is removed.
    Jump,
}

/// What an accepted move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The move that was applied.
    pub action: Move,
    /// Step or jump.
    pub kind: MoveKind,
    /// Square of the removed opposing piece, for jumps.
    pub captured: Option<Square>,
    /// True if the moving man was crowned on landing.
    pub promoted: bool,
    /// Engine state after the move.
    pub phase: Phase,
}

/// Reason a move was rejected.
///
/// A rejected move never changes the game.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// A coordinate was outside 0-7.
    #[display("Coordinate ({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
    },

    /// The source square does not hold a piece of the player to move.
    #[display("No piece of the player to move on {}", _0)]
    NotYourPiece(#[error(not(source))] Square),

    /// The move breaks the movement or capture rules.
    #[display("Illegal move from {} to {}", from, to)]
    IllegalMove {
        /// Source square.
        from: Square,
        /// Destination square.
        to: Square,
    },

    /// A capture chain is in progress and a different piece was moved.
    #[display("Capture must continue from {}, not {}", required, attempted)]
    MustContinueCapture {
        /// Square of the piece that has to keep jumping.
        required: Square,
        /// Source square that was attempted.
        attempted: Square,
    },

    /// The game has already ended.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}
