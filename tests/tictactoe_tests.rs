//! Tic-tac-toe rules: turn order, placement, wins and early draws.

use game_ai::core::{GameError, PlayerId};
use game_ai::games::tictactoe::{GameStatus, Line, Move, TicTacToeGame};
use game_ai::rules::SearchableGame;

const X: PlayerId = PlayerId::One;
const O: PlayerId = PlayerId::Two;

fn started() -> TicTacToeGame {
    let mut game = TicTacToeGame::new();
    game.reset(1).unwrap();
    game
}

fn play(game: &mut TicTacToeGame, moves: &[(PlayerId, usize, usize)]) {
    for &(player, row, column) in moves {
        game.make_move(Move::new(player, row, column)).unwrap();
    }
}

// =============================================================================
// Board and Turn Tests
// =============================================================================

#[test]
fn test_default_board_size() {
    assert_eq!(TicTacToeGame::new().board_size(), 3);
}

#[test]
fn test_player_at_position() {
    let mut game = started();
    play(&mut game, &[(X, 1, 1), (O, 2, 2), (X, 0, 0)]);

    assert_eq!(game.player_at(0, 1), None);
    assert_eq!(game.player_at(0, 0), Some(X));
    assert_eq!(game.player_at(1, 1), Some(X));
    assert_eq!(game.player_at(2, 2), Some(O));
    assert_eq!(game.player_at(3, 0), None);
}

#[test]
fn test_make_move_places_mark() {
    let mut game = started();
    assert_eq!(game.player_at(1, 1), None);

    game.make_move(Move::new(X, 1, 1)).unwrap();
    assert_eq!(game.player_at(1, 1), Some(X));
    assert_eq!(game.player_at(0, 0), None);

    game.make_move(Move::new(O, 0, 0)).unwrap();
    assert_eq!(game.player_at(0, 0), Some(O));
}

#[test]
fn test_next_player_alternates() {
    let mut game = started();
    assert_eq!(game.next_player(), X);

    game.make_move(Move::new(X, 0, 0)).unwrap();
    assert_eq!(game.next_player(), O);

    game.make_move(Move::new(O, 1, 0)).unwrap();
    assert_eq!(game.next_player(), X);
}

#[test]
fn test_reset_with_second_player() {
    let mut game = started();
    play(&mut game, &[(X, 0, 0)]);

    game.reset(2).unwrap();
    assert_eq!(game.next_player(), O);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert!(game.to_rows().iter().flatten().all(|&v| v == 0));
}

#[test]
fn test_reset_invalid_player_keeps_game() {
    let mut game = started();
    play(&mut game, &[(X, 0, 0)]);

    assert_eq!(game.reset(3), Err(GameError::InvalidPlayer(3)));
    assert_eq!(game.next_player(), O);
    assert_eq!(game.player_at(0, 0), Some(X));
}

#[test]
fn test_rejected_moves() {
    let mut game = started();
    play(&mut game, &[(X, 1, 1)]);

    assert_eq!(
        game.make_move(Move::new(O, 1, 1)),
        Err(GameError::Occupied { row: 1, column: 1 })
    );
    assert_eq!(
        game.make_move(Move::new(X, 0, 0)),
        Err(GameError::WrongPlayer { expected: O, actual: X })
    );
    assert_eq!(
        game.make_move(Move::new(O, 0, 3)),
        Err(GameError::OutOfBounds { row: 0, column: 3, size: 3 })
    );
    assert_eq!(game.next_player(), O);
}

// =============================================================================
// Win Detection Tests
// =============================================================================

#[test]
fn test_row_win() {
    let mut game = started();
    play(&mut game, &[(X, 2, 0), (O, 1, 0), (X, 2, 1), (O, 1, 1)]);
    assert!(game.is_winning_move(&Move::new(X, 2, 2)));
}

#[test]
fn test_column_win() {
    let mut game = started();
    play(&mut game, &[(X, 0, 2), (O, 0, 0), (X, 1, 2), (O, 1, 0)]);
    assert!(game.is_winning_move(&Move::new(X, 2, 2)));
}

#[test]
fn test_diagonal_win() {
    let mut game = started();
    play(&mut game, &[(X, 0, 0), (O, 0, 1), (X, 1, 1), (O, 0, 2)]);
    assert!(game.is_winning_move(&Move::new(X, 2, 2)));
}

#[test]
fn test_anti_diagonal_win() {
    let mut game = started();
    play(&mut game, &[(X, 2, 0), (O, 0, 0), (X, 1, 1), (O, 1, 0)]);
    assert!(game.is_winning_move(&Move::new(X, 0, 2)));
}

#[test]
fn test_win_after_non_winning_move() {
    let mut game = started();
    play(&mut game, &[(X, 2, 0), (O, 2, 1), (X, 1, 0), (O, 0, 0), (X, 0, 2), (O, 1, 1)]);

    let quiet = Move::new(X, 0, 1);
    assert!(!game.is_winning_move(&quiet));
    assert_eq!(game.make_move(quiet), Ok(GameStatus::InProgress));

    let winner = Move::new(O, 2, 2);
    assert!(game.is_winning_move(&winner));
    assert!(!game.is_draw_move(&winner));
    assert_eq!(game.make_move(winner), Ok(GameStatus::PlayerTwoWon));
    assert_eq!(game.winning_line(), Some(Line::MainDiagonal));
}

#[test]
fn test_no_moves_after_game_over() {
    let mut game = started();
    play(&mut game, &[(X, 0, 0), (O, 1, 0), (X, 0, 1), (O, 1, 1), (X, 0, 2)]);

    assert_eq!(game.status(), GameStatus::PlayerOneWon);
    assert_eq!(game.winning_line(), Some(Line::Row(0)));
    assert!(game.available_moves().is_empty());
    assert_eq!(game.make_move(Move::new(O, 2, 2)), Err(GameError::GameOver));
}

// =============================================================================
// Draw Detection Tests
// =============================================================================

#[test]
fn test_draw_on_last_cell() {
    let game = TicTacToeGame::from_rows(&[vec![2, 1, 2], vec![1, 1, 2], vec![1, 2, 0]]);
    assert!(game.is_draw_move(&Move::new(X, 2, 2)));
}

#[test]
fn test_open_row_is_not_a_draw() {
    let game = TicTacToeGame::from_rows(&[vec![0, 0, 0], vec![2, 1, 1], vec![1, 0, 2]]);
    assert!(!game.is_draw_move(&Move::new(O, 0, 2)));
}

#[test]
fn test_draw_declared_with_open_cells() {
    // After X takes (2,1) every line holds both marks, with (2,2) still open.
    let mut game = TicTacToeGame::from_rows(&[vec![2, 2, 1], vec![1, 1, 2], vec![2, 0, 0]]);
    assert_eq!(game.next_player(), X);

    assert_eq!(game.make_move(Move::new(X, 2, 1)), Ok(GameStatus::Draw));
    assert_eq!(game.player_at(2, 2), None);
    assert!(game.available_moves().is_empty());
}

// =============================================================================
// Larger Boards
// =============================================================================

#[test]
fn test_four_by_four_anti_diagonal() {
    let mut game = TicTacToeGame::with_size(4);
    game.reset(1).unwrap();
    play(
        &mut game,
        &[(X, 0, 3), (O, 0, 0), (X, 1, 2), (O, 1, 0), (X, 2, 1), (O, 2, 0)],
    );

    assert!(game.is_winning_move(&Move::new(X, 3, 0)));
    assert!(!game.is_winning_move(&Move::new(X, 3, 3)));
    assert_eq!(game.make_move(Move::new(X, 3, 0)), Ok(GameStatus::PlayerOneWon));
    assert_eq!(game.winning_line(), Some(Line::AntiDiagonal));
}

#[test]
fn test_malformed_import_falls_back() {
    let game = TicTacToeGame::from_rows(&[vec![1, 2], vec![0, 0, 0]]);
    assert_eq!(game.board_size(), 3);
    assert!(game.to_rows().iter().flatten().all(|&v| v == 0));
}
