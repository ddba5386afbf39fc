//! Turn order, move rejection and index bookkeeping.

use super::{at, game_with, play};
use crate::board::{PieceKind::*, Team, Team::*};
use crate::game::{GameMediator, GameState};

#[test]
fn test_white_moves_first() {
    let mut game = GameMediator::default();
    assert_eq!(game.current_turn(), White);
    assert!(!game.move_piece(at(5, 7), at(5, 5)));
    assert!(game.move_piece(at(5, 2), at(5, 4)));
    assert_eq!(game.current_turn(), Black);
}

#[test]
fn test_turns_alternate() {
    let mut game = GameMediator::default();
    play(&mut game, &[((5, 2), (5, 4)), ((5, 7), (5, 5))]);
    assert_eq!(game.current_turn(), White);
    assert!(!game.move_piece(at(4, 7), at(4, 5)));
}

#[test]
fn test_rejected_move_leaves_state_untouched() {
    let mut game = GameMediator::default();
    let before = game.board().clone();
    assert!(!game.move_piece(at(1, 1), at(1, 3)));
    assert!(!game.move_piece(at(4, 4), at(4, 5)));
    assert!(!game.move_piece(at(5, 2), at(5, 5)));
    assert_eq!(game.board(), &before);
    assert_eq!(game.current_turn(), White);
    assert!(game.moved_pieces().is_empty());
}

#[test]
fn test_off_board_coordinates_rejected() {
    let mut game = GameMediator::default();
    assert!(!game.move_piece(at(5, 2), at(5, 9)));
    assert!(!game.move_piece(at(9, 2), at(8, 3)));
    assert!(game.legal_moves_from(at(9, 9)).is_empty());
}

#[test]
fn test_capture_updates_indices() {
    let mut game = GameMediator::default();
    play(
        &mut game,
        &[((5, 2), (5, 4)), ((4, 7), (4, 5)), ((5, 4), (4, 5))],
    );
    assert_eq!(game.piece_coordinates(Black).len(), 14);
    assert_eq!(game.piece_coordinates(White).len(), 15);
    assert!(game.piece_coordinates(White).contains(&at(4, 5)));
    assert!(!game.piece_coordinates(White).contains(&at(5, 4)));
    assert!(!game.piece_coordinates(Black).contains(&at(4, 5)));
}

#[test]
fn test_king_moves_update_king_coordinate() {
    let mut game = GameMediator::default();
    play(&mut game, &[((5, 2), (5, 4)), ((5, 7), (5, 5)), ((5, 1), (5, 2))]);
    assert_eq!(game.king_coordinate(White), Some(at(5, 2)));
    assert_eq!(game.king_coordinate(Black), Some(at(5, 8)));
    assert_eq!(game.king_coordinate(Team::Ghost), None);
}

#[test]
fn test_moved_pieces_recorded_once() {
    let mut game = GameMediator::default();
    play(
        &mut game,
        &[((7, 1), (6, 3)), ((7, 8), (6, 6)), ((6, 3), (7, 1)), ((6, 6), (7, 8))],
    );
    assert_eq!(game.moved_pieces().len(), 2);
}

#[test]
fn test_legal_moves_from_start() {
    let game = GameMediator::default();
    assert_eq!(game.legal_moves().len(), 20);
    assert_eq!(game.legal_moves_from(at(2, 1)).len(), 2);
    assert!(game.legal_moves_from(at(2, 8)).is_empty());
}

#[test]
fn test_pinned_piece_move_rejected() {
    let mut game = game_with(&[
        (5, 1, White, King),
        (5, 2, White, Knight),
        (5, 8, Black, Rook),
        (1, 8, Black, King),
    ]);
    assert!(!game.move_piece(at(5, 2), at(3, 3)));
    assert!(game.move_piece(at(5, 1), at(4, 1)));
}

#[test]
fn test_must_answer_check() {
    let mut game = GameMediator::default();
    // 1. e4 f5 2. Qh5+
    play(&mut game, &[((5, 2), (5, 4)), ((6, 7), (6, 5)), ((4, 1), (8, 5))]);
    assert!(game.is_in_check());
    assert_eq!(game.state(), GameState::Movement);
    assert!(!game.move_piece(at(1, 7), at(1, 6)));
    // g6 blocks
    assert!(game.move_piece(at(7, 7), at(7, 6)));
    assert!(!game.is_in_check());
}

#[test]
fn test_load_game_resets_everything() {
    let mut game = GameMediator::default();
    play(&mut game, &[((5, 2), (5, 4))]);
    game.load_game(&crate::game::StandardBoardFactory).unwrap();
    assert_eq!(game.current_turn(), White);
    assert!(game.moved_pieces().is_empty());
    assert_eq!(game.en_passant_ghost(), None);
    assert_eq!(game.piece_coordinates(White).len(), 15);
}

#[test]
fn test_load_game_error_keeps_current_game() {
    let mut game = GameMediator::default();
    play(&mut game, &[((5, 2), (5, 4))]);
    let bad = crate::board::BoardBuilder::new().size(0, 8);
    assert!(game.load_game(&bad).is_err());
    assert_eq!(game.current_turn(), Black);
}
