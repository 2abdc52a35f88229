//! Move legality for checkers.
//!
//! `MoveValidator` is a pure function of the board, the mover, the move and
//! the rule configuration. It never mutates anything, so asking twice gives
//! the same answer.

use super::super::action::{Move, MoveError, MoveKind};
use super::super::board::Board;
use super::super::config::RulesConfig;
use super::super::square::Square;
use super::super::types::{Piece, Player};
use tracing::{instrument, trace};

/// Column directions every piece may use.
const COL_DIRECTIONS: [i8; 2] = [-1, 1];

/// Decides whether proposed moves are legal.
pub struct MoveValidator;

impl MoveValidator {
    /// Checks a move for `player` and classifies it.
    ///
    /// Rules are applied in order:
    /// 1. `from` must hold a piece owned by `player`.
    /// 2. `to` must be empty.
    /// 3. A step goes one square diagonally; men only step forward.
    /// 4. With forced capture on, a step is illegal while any jump exists.
    /// 5. A jump goes two squares over an adjacent opposing piece; men only
    ///    jump forward unless backward captures are configured.
    /// 6. Any other distance is illegal.
    ///
    /// # Errors
    ///
    /// `MoveError::NotYourPiece` when rule 1 fails, `MoveError::IllegalMove`
    /// for everything else.
    #[instrument(skip(board, action, rules), fields(%action))]
    pub fn check(
        board: &Board,
        player: Player,
        action: &Move,
        rules: &RulesConfig,
    ) -> Result<MoveKind, MoveError> {
        let illegal = MoveError::IllegalMove {
            from: action.from,
            to: action.to,
        };

        let piece = match board.get(action.from).piece() {
            Some(piece) if piece.color == player => piece,
            _ => return Err(MoveError::NotYourPiece(action.from)),
        };

        if !board.get(action.to).is_empty() {
            trace!("destination occupied");
            return Err(illegal);
        }

        match action.kind() {
            Some(MoveKind::Step) => {
                let (d_row, _) = action.from.delta(action.to);
                if !piece.row_directions(false).contains(&d_row) {
                    trace!("step in a direction this piece cannot move");
                    return Err(illegal);
                }
                if *rules.forced_capture() && Self::has_any_capture(board, player, rules) {
                    trace!("step refused while a capture is available");
                    return Err(illegal);
                }
                Ok(MoveKind::Step)
            }
            Some(MoveKind::Jump) => {
                let (d_row, d_col) = action.from.delta(action.to);
                if Self::jump_target(board, action.from, piece, d_row / 2, d_col / 2, rules)
                    .is_some()
                {
                    Ok(MoveKind::Jump)
                } else {
                    trace!("no opposing piece to jump");
                    Err(illegal)
                }
            }
            None => Err(illegal),
        }
    }

    /// Returns true if `from -> to` is legal for `player`.
    pub fn is_legal(
        board: &Board,
        player: Player,
        from: Square,
        to: Square,
        rules: &RulesConfig,
    ) -> bool {
        Self::check(board, player, &Move::new(from, to), rules).is_ok()
    }

    /// Landing squares of every jump the piece on `from` can make.
    ///
    /// Empty if `from` is empty.
    pub fn piece_jumps(board: &Board, from: Square, rules: &RulesConfig) -> Vec<Square> {
        let Some(piece) = board.get(from).piece() else {
            return Vec::new();
        };
        piece
            .row_directions(*rules.men_capture_backward())
            .iter()
            .flat_map(|&d_row| COL_DIRECTIONS.map(|d_col| (d_row, d_col)))
            .filter_map(|(d_row, d_col)| {
                Self::jump_target(board, from, piece, d_row, d_col, rules)
            })
            .collect()
    }

    /// Destination squares of every step the piece on `from` can make,
    /// ignoring forced capture.
    pub fn piece_steps(board: &Board, from: Square) -> Vec<Square> {
        let Some(piece) = board.get(from).piece() else {
            return Vec::new();
        };
        piece
            .row_directions(false)
            .iter()
            .flat_map(|&d_row| COL_DIRECTIONS.map(|d_col| (d_row, d_col)))
            .filter_map(|(d_row, d_col)| from.offset(d_row, d_col))
            .filter(|to| board.get(*to).is_empty())
            .collect()
    }

    /// True iff some piece of `player` has at least one legal jump.
    #[instrument(skip(board, rules))]
    pub fn has_any_capture(board: &Board, player: Player, rules: &RulesConfig) -> bool {
        board
            .squares_of(player)
            .any(|sq| !Self::piece_jumps(board, sq, rules).is_empty())
    }

    /// Squares of every piece of `player` that can jump.
    pub fn capturing_pieces(board: &Board, player: Player, rules: &RulesConfig) -> Vec<Square> {
        board
            .squares_of(player)
            .filter(|sq| !Self::piece_jumps(board, *sq, rules).is_empty())
            .collect()
    }

    /// Every legal move for `player`, jumps first.
    ///
    /// With forced capture on, steps are only listed when no jump exists.
    #[instrument(skip(board, rules))]
    pub fn legal_moves(board: &Board, player: Player, rules: &RulesConfig) -> Vec<Move> {
        let mut moves: Vec<Move> = board
            .squares_of(player)
            .flat_map(|from| {
                Self::piece_jumps(board, from, rules)
                    .into_iter()
                    .map(move |to| Move::new(from, to))
            })
            .collect();

        if moves.is_empty() || !*rules.forced_capture() {
            moves.extend(board.squares_of(player).flat_map(|from| {
                Self::piece_steps(board, from)
                    .into_iter()
                    .map(move |to| Move::new(from, to))
            }));
        }
        moves
    }

    /// Landing square of a jump by `piece` from `from` in direction
    /// `(d_row, d_col)`, if the jump is legal.
    fn jump_target(
        board: &Board,
        from: Square,
        piece: Piece,
        d_row: i8,
        d_col: i8,
        rules: &RulesConfig,
    ) -> Option<Square> {
        if !piece
            .row_directions(*rules.men_capture_backward())
            .contains(&d_row)
        {
            return None;
        }
        let over = from.offset(d_row, d_col)?;
        let to = from.offset(2 * d_row, 2 * d_col)?;
        let jumps_opponent = board
            .get(over)
            .piece()
            .is_some_and(|victim| victim.color != piece.color);
        (jumps_opponent && board.get(to).is_empty()).then_some(to)
    }
}
