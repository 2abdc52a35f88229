//! Strictly Checkers - a type-safe checkers rules engine.
//!
//! The engine owns the board, checks every move against the rules, resolves
//! multi-jump captures, crowns men, and decides when the game is over.
//! Rendering and input belong to the caller, which drives the engine with
//! discrete move requests.
//!
//! # Architecture
//!
//! - **Board**: 8x8 cell storage with bounds-checked access
//! - **MoveValidator**: step/jump legality, forced capture
//! - **CaptureResolver**: jumped square, chain continuation
//! - **Game**: turn order, promotion, capture counts, termination
//! - **Contracts**: pre/postconditions around every move
//!
//! # Example
//!
//! ```
//! use strictly_checkers::{Game, Player};
//!
//! let mut game = Game::new();
//! assert!(game.validate_move((2, 1), (3, 2)));
//! game.execute_move((2, 1), (3, 2)).unwrap();
//! assert_eq!(game.current_player(), Player::Dark);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod games;

// Crate-level exports - Game types (checkers)
pub use games::checkers::{
    BOARD_SIZE, Board, BoardError, CaptureResolver, Cell, ConfigError, ContinuesChain, Contract,
    Game, GameNotOver, LegalMove, Move, MoveContract, MoveError, MoveKind, MoveOutcome,
    MoveValidator, PIECES_PER_SIDE, Phase, Piece, Player, Rank, RulesConfig, Square,
};

// Crate-level exports - Invariants
pub use games::checkers::invariants::{
    CaptureAccountingInvariant, ChainConsistentInvariant, CheckersInvariants, CrownedInvariant,
    Invariant, InvariantSet, InvariantViolation, PlayableSquaresInvariant,
};

// Crate-level exports - Rule helpers
pub use games::checkers::rules::{check_winner, has_any_legal_move, promote_if_due};
