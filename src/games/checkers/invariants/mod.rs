//! First-class invariants for checkers.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. They are checked in debug builds and can be tested independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of up to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod capture_accounting;
pub mod chain_consistent;
pub mod crowned;
pub mod playable_squares;

pub use capture_accounting::CaptureAccountingInvariant;
pub use chain_consistent::ChainConsistentInvariant;
pub use crowned::CrownedInvariant;
pub use playable_squares::PlayableSquaresInvariant;

/// All checkers invariants as a composable set.
pub type CheckersInvariants = (
    PlayableSquaresInvariant,
    CaptureAccountingInvariant,
    CrownedInvariant,
    ChainConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::checkers::Game;

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = Game::new();
        assert!(CheckersInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = Game::new();
        game.execute_move((2, 1), (3, 2)).unwrap();
        game.execute_move((5, 4), (4, 3)).unwrap();
        game.execute_move((3, 2), (5, 4)).unwrap();
        assert!(CheckersInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        let mut game = Game::new();
        // A light man vanishes without being captured.
        game.board.clear(2, 1).unwrap();
        let violations = CheckersInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].description,
            CaptureAccountingInvariant::description()
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (PlayableSquaresInvariant, CrownedInvariant);
        assert!(TwoInvariants::check_all(&Game::new()).is_ok());
    }
}
