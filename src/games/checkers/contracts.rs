//! Contract-based validation for checkers.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::Game;
use super::action::{Move, MoveError, MoveKind};
use super::invariants::{CheckersInvariants, InvariantSet};
use super::rules::MoveValidator;
use super::types::Player;
use strum::IntoEnumIterator;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// Contracts formalize Hoare-style reasoning:
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    ///
    /// This verifies that the transition maintained system invariants.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The game must still be running.
pub struct GameNotOver;

impl GameNotOver {
    /// Returns the player to move.
    pub fn check(game: &Game) -> Result<Player, MoveError> {
        game.phase().to_move().ok_or(MoveError::GameAlreadyOver)
    }
}

/// Precondition: During a capture chain, only the chaining piece may move.
pub struct ContinuesChain;

impl ContinuesChain {
    /// Checks the move starts from the forced square, if there is one.
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        match game.phase().forced_from() {
            Some(required) if required != mov.from => Err(MoveError::MustContinueCapture {
                required,
                attempted: mov.from,
            }),
            _ => Ok(()),
        }
    }
}

/// Composite precondition: a move is legal if the game is running, it
/// respects a pending chain, and the movement rules allow it.
///
/// Mid-chain only jumps are accepted.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move and classifies it.
    #[instrument(skip(mov, game), fields(%mov))]
    pub fn check(mov: &Move, game: &Game) -> Result<MoveKind, MoveError> {
        let player = GameNotOver::check(game)?;
        ContinuesChain::check(mov, game)?;
        let kind = MoveValidator::check(game.board(), player, mov, game.rules())?;

        if game.phase().forced_from().is_some() && kind != MoveKind::Jump {
            return Err(MoveError::IllegalMove {
                from: mov.from,
                to: mov.to,
            });
        }
        Ok(kind)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game not over
/// - Chain respected
/// - Movement rules satisfied
///
/// Postconditions:
/// - Capture counters never decrease
/// - All board invariants hold
pub struct MoveContract;

impl Contract<Game, Move> for MoveContract {
    fn pre(game: &Game, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game).map(|_| ())
    }

    fn post(before: &Game, after: &Game) -> Result<(), MoveError> {
        for player in Player::iter() {
            if after.captured_count(player) < before.captured_count(player) {
                warn!(%player, "Capture counter went backward");
                return Err(MoveError::InvariantViolation(format!(
                    "Postcondition failed: capture counter for {} decreased",
                    player
                )));
            }
        }

        CheckersInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Invariant violated");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::checkers::square::Square;

    fn mv(from: (i32, i32), to: (i32, i32)) -> Move {
        Move::from_coords(from, to).unwrap()
    }

    #[test]
    fn test_precondition_opening_step() {
        let game = Game::new();
        assert!(MoveContract::pre(&game, &mv((2, 1), (3, 2))).is_ok());
    }

    #[test]
    fn test_precondition_wrong_side() {
        let game = Game::new();
        assert!(matches!(
            MoveContract::pre(&game, &mv((5, 2), (4, 3))),
            Err(MoveError::NotYourPiece(_))
        ));
    }

    #[test]
    fn test_legal_move_classifies() {
        let game = Game::new();
        assert_eq!(LegalMove::check(&mv((2, 3), (3, 4)), &game), Ok(MoveKind::Step));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = Game::new();
        let mut after = before.clone();
        after.execute_move((2, 1), (3, 2)).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = Game::new();
        let mut after = before.clone();
        after.execute_move((2, 1), (3, 2)).unwrap();

        // Corrupt the board
        after.board.clear(6, 1).unwrap();
        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_detects_counter_rollback() {
        let mut before = Game::new();
        before.execute_move((2, 1), (3, 2)).unwrap();
        before.execute_move((5, 4), (4, 3)).unwrap();
        before.execute_move((3, 2), (5, 4)).unwrap();

        let after = Game::new();
        assert!(MoveContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_chain_precondition() {
        let mut game = Game::new();
        let forced = Square::new(4, 3).unwrap();
        game.phase = crate::games::checkers::Phase::AwaitingContinuation {
            player: Player::Light,
            forced_from: forced,
        };
        assert_eq!(
            ContinuesChain::check(&mv((2, 1), (3, 2)), &game),
            Err(MoveError::MustContinueCapture {
                required: forced,
                attempted: Square::new(2, 1).unwrap(),
            })
        );
    }
}
