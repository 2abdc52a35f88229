//! Capture accounting invariant: every missing piece was captured once.

use super::super::Game;
use super::super::types::Player;
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: for each side, pieces captured by it plus opposing pieces
/// still on the board equals the opposing pieces the game started with.
pub struct CaptureAccountingInvariant;

impl Invariant<Game> for CaptureAccountingInvariant {
    fn holds(game: &Game) -> bool {
        Player::iter().all(|player| {
            let opponent = player.opponent();
            game.captured_count(player) as usize + game.board().count(opponent)
                == game.starting_pieces(opponent)
        })
    }

    fn description() -> &'static str {
        "Capture counters match pieces removed from the board"
    }
}
