//! Checkers game engine.
//!
//! `Game` owns the board and is its only mutator. Every move runs through
//! `MoveContract`: preconditions always, postconditions in debug builds. A
//! move is applied to a copy of the game and only committed once it has
//! been accepted, so a rejected move never changes anything.

use super::action::{Move, MoveError, MoveKind, MoveOutcome};
use super::board::Board;
use super::config::RulesConfig;
use super::contracts::{Contract, LegalMove, MoveContract};
use super::phases::Phase;
use super::rules::{CaptureResolver, MoveValidator, check_winner, promote_if_due};
use super::types::{Cell, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A game of checkers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(super) board: Board,
    pub(super) phase: Phase,
    to_move: Player,
    captured_by_light: u32,
    captured_by_dark: u32,
    starting_light: usize,
    starting_dark: usize,
    rules: RulesConfig,
}

impl Game {
    /// Starts a game from the standard layout with default rules.
    /// Light moves first.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rules(RulesConfig::default())
    }

    /// Starts a game from the standard layout with the given rules.
    #[instrument]
    pub fn with_rules(rules: RulesConfig) -> Self {
        Self::from_board(Board::new(), Player::Light, rules)
    }

    /// Starts a game from an arbitrary position.
    ///
    /// Capture counters start at zero. If `to_move` cannot move, the game is
    /// over immediately.
    #[instrument(skip(board))]
    pub fn from_board(board: Board, to_move: Player, rules: RulesConfig) -> Self {
        let phase = match check_winner(&board, to_move, &rules) {
            Some(winner) => Phase::GameOver { winner },
            None => Phase::AwaitingMove(to_move),
        };
        Self {
            starting_light: board.count(Player::Light),
            starting_dark: board.count(Player::Dark),
            board,
            phase,
            to_move,
            captured_by_light: 0,
            captured_by_dark: 0,
            rules,
        }
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The board as an 8x8 grid of piece codes.
    pub fn board_state(&self) -> [[u8; 8]; 8] {
        self.board.codes()
    }

    /// Player whose turn it is. After the game ends, the side that lost.
    pub fn current_player(&self) -> Player {
        self.to_move
    }

    /// Current engine state.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Rules this game is played under.
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// Number of opposing pieces `player` has captured so far.
    pub fn captured_count(&self, player: Player) -> u32 {
        match player {
            Player::Light => self.captured_by_light,
            Player::Dark => self.captured_by_dark,
        }
    }

    /// Number of pieces `player` had when the game started.
    pub fn starting_pieces(&self, player: Player) -> usize {
        match player {
            Player::Light => self.starting_light,
            Player::Dark => self.starting_dark,
        }
    }

    /// Returns true once the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.phase.is_over()
    }

    /// The winner, once the game has ended.
    pub fn winner(&self) -> Option<Player> {
        self.phase.winner()
    }

    /// Checks a move given as raw `(row, col)` pairs without applying it.
    ///
    /// # Errors
    ///
    /// - `MoveError::GameAlreadyOver` once the game has ended
    /// - `MoveError::OutOfBounds` for a coordinate outside 0-7
    /// - `MoveError::MustContinueCapture` when another piece must keep jumping
    /// - `MoveError::NotYourPiece` / `MoveError::IllegalMove` from the rules
    pub fn check_move(&self, from: (i32, i32), to: (i32, i32)) -> Result<MoveKind, MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameAlreadyOver);
        }
        let action = Move::from_coords(from, to)?;
        LegalMove::check(&action, self)
    }

    /// Returns true if the move would be accepted by `execute_move`.
    pub fn validate_move(&self, from: (i32, i32), to: (i32, i32)) -> bool {
        self.check_move(from, to).is_ok()
    }

    /// Applies a move given as raw `(row, col)` pairs.
    ///
    /// # Errors
    ///
    /// Same as [`Game::check_move`]. On error the game is unchanged.
    pub fn execute_move(
        &mut self,
        from: (i32, i32),
        to: (i32, i32),
    ) -> Result<MoveOutcome, MoveError> {
        if self.is_game_over() {
            warn!(?from, ?to, "Move attempted after game over");
            return Err(MoveError::GameAlreadyOver);
        }
        let action = Move::from_coords(from, to).inspect_err(|e| {
            warn!(error = %e, "Move rejected");
        })?;
        self.make_move(action)
    }

    /// Applies a move.
    ///
    /// # Errors
    ///
    /// Returns the reason the move was rejected; the game is unchanged.
    #[instrument(skip(self, action), fields(%action, player = %self.to_move))]
    pub fn make_move(&mut self, action: Move) -> Result<MoveOutcome, MoveError> {
        // Precondition: Check contract
        if let Err(e) = MoveContract::pre(self, &action) {
            warn!(error = %e, "Move rejected");
            return Err(e);
        }
        let kind = action.kind().ok_or(MoveError::IllegalMove {
            from: action.from,
            to: action.to,
        })?;

        let mut next = self.clone();
        let outcome = next.apply(action, kind);

        // Postcondition: Verify contract in debug builds
        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        *self = next;
        Ok(outcome)
    }

    /// Every move the player to move may make right now.
    pub fn legal_moves(&self) -> Vec<Move> {
        match self.phase {
            Phase::GameOver { .. } => Vec::new(),
            Phase::AwaitingContinuation { forced_from, .. } => {
                MoveValidator::piece_jumps(&self.board, forced_from, &self.rules)
                    .into_iter()
                    .map(|to| Move::new(forced_from, to))
                    .collect()
            }
            Phase::AwaitingMove(player) => {
                MoveValidator::legal_moves(&self.board, player, &self.rules)
            }
        }
    }

    /// Moves the piece, resolves the capture, crowns, and advances the phase.
    /// Assumes the move has passed its preconditions.
    fn apply(&mut self, action: Move, kind: MoveKind) -> MoveOutcome {
        let player = self.to_move;
        let cell = self.board.get(action.from);
        self.board.set(action.to, cell);
        self.board.set(action.from, Cell::Empty);

        let captured = match kind {
            MoveKind::Jump => {
                let over = CaptureResolver::jumped_square(action.from, action.to);
                self.board.set(over, Cell::Empty);
                match player {
                    Player::Light => self.captured_by_light += 1,
                    Player::Dark => self.captured_by_dark += 1,
                }
                debug!(%over, "Piece captured");
                Some(over)
            }
            MoveKind::Step => None,
        };

        let promoted = promote_if_due(&mut self.board, action.to);
        self.phase = self.next_phase(player, kind, action);

        match self.phase {
            Phase::GameOver { winner } => info!(%winner, "Game over"),
            phase => debug!(%phase, "Move applied"),
        }

        MoveOutcome {
            action,
            kind,
            captured,
            promoted,
            phase: self.phase,
        }
    }

    /// Decides who moves next once `player` has completed `action`.
    fn next_phase(&mut self, player: Player, kind: MoveKind, action: Move) -> Phase {
        let opponent = player.opponent();

        if self.board.count(opponent) == 0 {
            self.to_move = opponent;
            return Phase::GameOver { winner: player };
        }

        if kind == MoveKind::Jump
            && CaptureResolver::must_continue(&self.board, player, action.to, &self.rules)
        {
            return Phase::AwaitingContinuation {
                player,
                forced_from: action.to,
            };
        }

        self.to_move = opponent;
        match check_winner(&self.board, opponent, &self.rules) {
            Some(winner) => Phase::GameOver { winner },
            None => Phase::AwaitingMove(opponent),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
