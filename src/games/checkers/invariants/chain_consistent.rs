//! Chain consistency invariant: a pending capture chain can actually go on.

use super::super::Game;
use super::super::rules::CaptureResolver;
use super::Invariant;

/// Invariant: while a capture chain is pending, the forced square holds a
/// piece of the player to move and that piece has a jump.
pub struct ChainConsistentInvariant;

impl Invariant<Game> for ChainConsistentInvariant {
    fn holds(game: &Game) -> bool {
        match game.phase().forced_from() {
            Some(forced_from) => CaptureResolver::must_continue(
                game.board(),
                game.current_player(),
                forced_from,
                game.rules(),
            ),
            None => true,
        }
    }

    fn description() -> &'static str {
        "A pending capture chain has a jump available"
    }
}
