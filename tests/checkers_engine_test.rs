//! End-to-end tests for the checkers engine through its public API.

use strictly_checkers::{Board, Cell, Game, MoveError, Phase, Piece, Player, Rank, RulesConfig};

fn count_code(game: &Game, codes: &[u8]) -> usize {
    game.board_state()
        .iter()
        .flatten()
        .filter(|code| codes.contains(*code))
        .count()
}

#[test]
fn test_initial_position() {
    let game = Game::new();
    let state = game.board_state();

    assert_eq!(count_code(&game, &[1]), 12);
    assert_eq!(count_code(&game, &[3]), 12);
    assert_eq!(count_code(&game, &[2, 4]), 0);
    assert!(state[3].iter().all(|&code| code == 0));
    assert!(state[4].iter().all(|&code| code == 0));
    assert_eq!(game.current_player().code(), 1);
    assert_eq!(game.captured_count(Player::Light), 0);
    assert_eq!(game.captured_count(Player::Dark), 0);
    assert!(!game.is_game_over());
}

#[test]
fn test_opening_exchange() {
    let mut game = Game::new();

    // No capture is available for either side yet.
    assert!(game.validate_move((2, 1), (3, 2)));
    game.execute_move((2, 1), (3, 2)).expect("light opening step");
    assert_eq!(game.current_player(), Player::Dark);

    game.execute_move((5, 4), (4, 3)).expect("dark reply");
    assert_eq!(game.current_player(), Player::Light);

    // Light must now take the man on (4,3).
    assert!(!game.validate_move((2, 3), (3, 4)));
    let dark_before = count_code(&game, &[3, 4]);
    let outcome = game.execute_move((3, 2), (5, 4)).expect("light capture");

    assert_eq!(count_code(&game, &[3, 4]), dark_before - 1);
    assert_eq!(game.captured_count(Player::Light), 1);
    assert_eq!(game.captured_count(Player::Dark), 0);
    assert_eq!(game.board_state()[4][3], 0);
    assert_eq!(outcome.captured.map(|sq| (sq.row(), sq.col())), Some((4, 3)));
}

#[test]
fn test_validate_is_idempotent_and_agrees_with_execute() {
    let game = Game::new();
    for from_row in -1..9 {
        for from_col in -1..9 {
            for (d_row, d_col) in [(1, 1), (1, -1), (-1, 1), (-1, -1), (2, 2), (2, -2), (0, 1)] {
                let from = (from_row, from_col);
                let to = (from_row + d_row, from_col + d_col);
                let first = game.validate_move(from, to);
                assert_eq!(first, game.validate_move(from, to));

                let mut probe = game.clone();
                assert_eq!(first, probe.execute_move(from, to).is_ok());
                if !first {
                    assert_eq!(probe, game);
                }
            }
        }
    }
}

#[test]
fn test_out_of_bounds_is_rejected() {
    let mut game = Game::new();
    assert!(!game.validate_move((2, 1), (3, -1)));
    assert_eq!(
        game.execute_move((2, 7), (3, 8)),
        Err(MoveError::OutOfBounds { row: 3, col: 8 })
    );
    assert_eq!(
        game.execute_move((-1, 0), (0, 1)),
        Err(MoveError::OutOfBounds { row: -1, col: 0 })
    );
}

#[test]
fn test_chain_rejects_other_pieces_without_mutation() {
    let mut board = Board::empty();
    board.place(2, 1, Cell::Occupied(Piece::man(Player::Light))).unwrap();
    board.place(2, 7, Cell::Occupied(Piece::man(Player::Light))).unwrap();
    board.place(3, 2, Cell::Occupied(Piece::man(Player::Dark))).unwrap();
    board.place(5, 4, Cell::Occupied(Piece::man(Player::Dark))).unwrap();
    board.place(7, 6, Cell::Occupied(Piece::man(Player::Dark))).unwrap();
    let mut game = Game::from_board(board, Player::Light, RulesConfig::default());

    game.execute_move((2, 1), (4, 3)).unwrap();
    let mid_chain = game.clone();

    assert!(matches!(
        game.execute_move((2, 7), (3, 6)),
        Err(MoveError::MustContinueCapture { .. })
    ));
    // A step by the chaining piece itself is not a continuation either.
    assert!(matches!(
        game.execute_move((4, 3), (5, 2)),
        Err(MoveError::IllegalMove { .. })
    ));
    assert_eq!(game, mid_chain);

    game.execute_move((4, 3), (6, 5)).unwrap();
    assert_eq!(game.phase(), Phase::AwaitingMove(Player::Dark));
    assert_eq!(game.captured_count(Player::Light), 2);
}

#[test]
fn test_promotion_visible_immediately() {
    let mut board = Board::empty();
    board.place(1, 2, Cell::Occupied(Piece::man(Player::Dark))).unwrap();
    board.place(5, 6, Cell::Occupied(Piece::man(Player::Light))).unwrap();
    let mut game = Game::from_board(board, Player::Dark, RulesConfig::default());

    game.execute_move((1, 2), (0, 3)).unwrap();
    assert_eq!(game.board_state()[0][3], 4);
    assert_eq!(game.board().occupant_rank(0, 3), Some(Rank::King));
}

#[test]
fn test_game_over_after_last_capture() {
    let mut board = Board::empty();
    board.place(4, 3, Cell::Occupied(Piece::king(Player::Dark))).unwrap();
    board.place(3, 2, Cell::Occupied(Piece::man(Player::Light))).unwrap();
    let mut game = Game::from_board(board, Player::Dark, RulesConfig::default());

    game.execute_move((4, 3), (2, 1)).unwrap();
    assert!(game.is_game_over());
    assert_eq!(game.winner().map(Player::code), Some(3));
    assert_eq!(game.captured_count(Player::Dark), 1);
    assert_eq!(game.execute_move((2, 1), (1, 0)), Err(MoveError::GameAlreadyOver));
    assert!(!game.validate_move((2, 1), (1, 0)));
}

#[test]
fn test_no_moves_loses() {
    // Light's only man is wedged against the edge behind a dark wall.
    let mut board = Board::empty();
    board.place(0, 1, Cell::Occupied(Piece::man(Player::Light))).unwrap();
    board.place(1, 0, Cell::Occupied(Piece::man(Player::Dark))).unwrap();
    board.place(1, 2, Cell::Occupied(Piece::man(Player::Dark))).unwrap();
    board.place(2, 3, Cell::Occupied(Piece::man(Player::Dark))).unwrap();
    let game = Game::from_board(board, Player::Light, RulesConfig::default());

    assert!(game.is_game_over());
    assert_eq!(game.winner(), Some(Player::Dark));
}

#[test]
fn test_capture_counters_are_monotonic_over_a_game() {
    let mut game = Game::new();
    let mut last = (0, 0);
    // Play the first legal move each turn until the game ends or 200 plies.
    for _ in 0..200 {
        let Some(action) = game.legal_moves().first().copied() else {
            break;
        };
        game.make_move(action).expect("listed moves are legal");

        let now = (
            game.captured_count(Player::Light),
            game.captured_count(Player::Dark),
        );
        assert!(now.0 >= last.0 && now.1 >= last.1);
        assert_eq!(
            now.0 as usize + game.board().count(Player::Dark),
            12,
            "light captures account for missing dark pieces"
        );
        assert_eq!(now.1 as usize + game.board().count(Player::Light), 12);
        last = now;
    }
}

#[test]
fn test_optional_capture_rules() {
    let rules = RulesConfig::new(false, false);
    let mut game = Game::with_rules(rules);
    game.execute_move((2, 1), (3, 2)).unwrap();
    game.execute_move((5, 4), (4, 3)).unwrap();

    // Capture is available but not required.
    assert!(game.validate_move((3, 2), (5, 4)));
    assert!(game.validate_move((2, 5), (3, 6)));
}
