//! End-of-game detection for checkers.

use super::super::board::Board;
use super::super::config::RulesConfig;
use super::super::types::Player;
use super::movement::MoveValidator;
use tracing::instrument;

/// True iff `player` has at least one legal step or jump.
#[instrument(skip(board, rules))]
pub fn has_any_legal_move(board: &Board, player: Player, rules: &RulesConfig) -> bool {
    board.squares_of(player).any(|sq| {
        !MoveValidator::piece_jumps(board, sq, rules).is_empty()
            || !MoveValidator::piece_steps(board, sq).is_empty()
    })
}

/// Decides the game with `to_move` about to play.
///
/// Returns the winner if `to_move` has no pieces or no legal move.
#[instrument(skip(board, rules))]
pub fn check_winner(board: &Board, to_move: Player, rules: &RulesConfig) -> Option<Player> {
    if board.count(to_move) == 0 || !has_any_legal_move(board, to_move, rules) {
        Some(to_move.opponent())
    } else {
        None
    }
}
