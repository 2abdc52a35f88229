//! Crowning men that reach the far row.

use super::super::board::Board;
use super::super::square::Square;
use super::super::types::Rank;
use tracing::{debug, instrument};

/// Crowns the man on `sq` if it stands on its promotion row.
///
/// Returns true if a promotion happened. Kings and empty squares are left
/// alone.
#[instrument(skip(board))]
pub fn promote_if_due(board: &mut Board, sq: Square) -> bool {
    match board.get(sq).piece() {
        Some(piece) if piece.rank == Rank::Man && sq.row() == piece.color.promotion_row() => {
            board.set(sq, piece.crowned().into());
            debug!(%sq, player = %piece.color, "Man crowned");
            true
        }
        _ => false,
    }
}
