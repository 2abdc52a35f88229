//! Playable squares invariant: pieces only stand on dark squares.

use super::super::Game;
use super::super::square::Square;
use super::Invariant;

/// Invariant: every piece sits on a square where `row + col` is odd.
pub struct PlayableSquaresInvariant;

impl Invariant<Game> for PlayableSquaresInvariant {
    fn holds(game: &Game) -> bool {
        Square::all()
            .filter(|sq| !sq.is_playable())
            .all(|sq| game.board().get(sq).is_empty())
    }

    fn description() -> &'static str {
        "Pieces occupy only playable squares"
    }
}
