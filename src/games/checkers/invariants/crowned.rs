//! Crowned invariant: no man is left standing on its promotion row.

use super::super::Game;
use super::super::square::Square;
use super::super::types::Rank;
use super::Invariant;

/// Invariant: a man that reached the far row has already been crowned.
pub struct CrownedInvariant;

impl Invariant<Game> for CrownedInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        Square::playable().all(|sq| match board.get(sq).piece() {
            Some(piece) => piece.rank == Rank::King || sq.row() != piece.color.promotion_row(),
            None => true,
        })
    }

    fn description() -> &'static str {
        "Men on the promotion row are crowned"
    }
}
