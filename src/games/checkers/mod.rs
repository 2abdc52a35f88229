//! Checkers (English draughts) rules engine.

mod action;
mod board;
mod config;
mod contracts;
mod engine;
pub mod invariants;
mod phases;
pub mod rules;
mod square;
mod types;

pub use action::{Move, MoveError, MoveKind, MoveOutcome};
pub use board::{Board, BoardError, PIECES_PER_SIDE};
pub use config::{ConfigError, RulesConfig};
pub use contracts::{ContinuesChain, Contract, GameNotOver, LegalMove, MoveContract};
pub use engine::Game;
pub use phases::Phase;
pub use rules::{CaptureResolver, MoveValidator};
pub use square::{BOARD_SIZE, Square};
pub use types::{Cell, Piece, Player, Rank};
