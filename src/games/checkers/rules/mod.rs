//! Game rules for checkers.
//!
//! Pure functions over a board and a rule configuration. Nothing here owns
//! or mutates game state except `promote_if_due`, which the engine calls on
//! its own board.

pub mod capture;
pub mod movement;
pub mod promotion;
pub mod termination;

pub use capture::CaptureResolver;
pub use movement::MoveValidator;
pub use promotion::promote_if_due;
pub use termination::{check_winner, has_any_legal_move};
