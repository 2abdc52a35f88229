//! Capture resolution for checkers.
//!
//! Jumps are always exactly two diagonal squares, so the captured piece is
//! always on the midpoint.

use super::super::board::Board;
use super::super::config::RulesConfig;
use super::super::square::Square;
use super::super::types::Player;
use super::movement::MoveValidator;
use tracing::instrument;

/// Works out what a jump removes and whether the chain goes on.
pub struct CaptureResolver;

impl CaptureResolver {
    /// Square of the piece jumped over by `from -> to`.
    pub fn jumped_square(from: Square, to: Square) -> Square {
        from.midpoint(to)
    }

    /// True iff the piece of `player` that just landed on `landed_at` can
    /// jump again.
    #[instrument(skip(board, rules))]
    pub fn must_continue(
        board: &Board,
        player: Player,
        landed_at: Square,
        rules: &RulesConfig,
    ) -> bool {
        board
            .get(landed_at)
            .piece()
            .is_some_and(|piece| piece.color == player)
            && !MoveValidator::piece_jumps(board, landed_at, rules).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::checkers::types::{Cell, Piece};

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_jumped_square_is_midpoint() {
        assert_eq!(CaptureResolver::jumped_square(sq(2, 1), sq(4, 3)), sq(3, 2));
        assert_eq!(CaptureResolver::jumped_square(sq(5, 6), sq(3, 4)), sq(4, 5));
        assert_eq!(CaptureResolver::jumped_square(sq(4, 3), sq(6, 1)), sq(5, 2));
    }

    #[test]
    fn test_must_continue_with_second_victim() {
        let mut board = Board::empty();
        board.place(4, 3, Cell::Occupied(Piece::man(Player::Light))).unwrap();
        board.place(5, 4, Cell::Occupied(Piece::man(Player::Dark))).unwrap();
        let rules = RulesConfig::default();

        assert!(CaptureResolver::must_continue(&board, Player::Light, sq(4, 3), &rules));
        assert!(!CaptureResolver::must_continue(&board, Player::Dark, sq(4, 3), &rules));
    }

    #[test]
    fn test_chain_ends_without_victim() {
        let mut board = Board::empty();
        board.place(4, 3, Cell::Occupied(Piece::man(Player::Light))).unwrap();
        // Behind a man, so only reachable when backward captures are on.
        board.place(3, 2, Cell::Occupied(Piece::man(Player::Dark))).unwrap();

        assert!(!CaptureResolver::must_continue(
            &board,
            Player::Light,
            sq(4, 3),
            &RulesConfig::default()
        ));
        assert!(CaptureResolver::must_continue(
            &board,
            Player::Light,
            sq(4, 3),
            &RulesConfig::new(true, true)
        ));
    }
}
