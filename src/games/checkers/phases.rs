//! Engine states.

use super::square::Square;
use super::types::Player;
use serde::{Deserialize, Serialize};

/// Where the game stands between moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The player may move any of their pieces.
    AwaitingMove(Player),
    /// The player is mid-chain and must jump again with the piece on
    /// `forced_from`.
    AwaitingContinuation {
        /// Player keeping the turn.
        player: Player,
        /// Square of the piece that must keep jumping.
        forced_from: Square,
    },
    /// The game has ended.
    GameOver {
        /// Side that won.
        winner: Player,
    },
}

impl Phase {
    /// Player to move, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Player> {
        match self {
            Phase::AwaitingMove(player) | Phase::AwaitingContinuation { player, .. } => {
                Some(*player)
            }
            Phase::GameOver { .. } => None,
        }
    }

    /// Winner, once the game is over.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Phase::GameOver { winner } => Some(*winner),
            _ => None,
        }
    }

    /// Square the next move must start from, during a capture chain.
    pub fn forced_from(&self) -> Option<Square> {
        match self {
            Phase::AwaitingContinuation { forced_from, .. } => Some(*forced_from),
            _ => None,
        }
    }

    /// Returns true if the game has ended.
    pub fn is_over(&self) -> bool {
        matches!(self, Phase::GameOver { .. })
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::AwaitingMove(player) => write!(f, "{} to move", player),
            Phase::AwaitingContinuation {
                player,
                forced_from,
            } => write!(f, "{} must continue capturing from {}", player, forced_from),
            Phase::GameOver { winner } => write!(f, "Game over. {} wins", winner),
        }
    }
}
