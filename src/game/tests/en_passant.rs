//! Ghost bookkeeping and en-passant captures.

use super::{at, play};
use crate::board::{PieceKind, Team::*};
use crate::game::GameMediator;

#[test]
fn test_double_step_plants_ghost() {
    let mut game = GameMediator::default();
    play(&mut game, &[((5, 2), (5, 4))]);
    assert_eq!(game.en_passant_ghost(), Some(at(5, 3)));
    assert!(game.board().piece_at(at(5, 3)).is_some_and(|p| p.is_ghost()));
}

#[test]
fn test_ghost_expires_after_one_move() {
    let mut game = GameMediator::default();
    play(&mut game, &[((5, 2), (5, 4)), ((7, 8), (6, 6))]);
    assert_eq!(game.en_passant_ghost(), None);
    assert_eq!(game.board().piece_at(at(5, 3)), None);
}

#[test]
fn test_en_passant_capture() {
    let mut game = GameMediator::default();
    play(
        &mut game,
        &[((5, 2), (5, 4)), ((1, 7), (1, 6)), ((5, 4), (5, 5)), ((4, 7), (4, 5))],
    );
    assert_eq!(game.en_passant_ghost(), Some(at(4, 6)));
    assert!(game.move_piece(at(5, 5), at(4, 6)));

    let pawn = game.board().piece_at(at(4, 6)).unwrap();
    assert_eq!((pawn.team(), pawn.kind()), (White, PieceKind::Pawn));
    assert_eq!(game.board().piece_at(at(4, 5)), None);
    assert!(!game.piece_coordinates(Black).contains(&at(4, 5)));
    assert_eq!(game.piece_coordinates(Black).len(), 14);
    assert_eq!(game.en_passant_ghost(), None);
}

#[test]
fn test_en_passant_only_immediately() {
    let mut game = GameMediator::default();
    play(
        &mut game,
        &[
            ((5, 2), (5, 4)),
            ((1, 7), (1, 6)),
            ((5, 4), (5, 5)),
            ((4, 7), (4, 5)),
            ((8, 2), (8, 3)),
            ((1, 6), (1, 5)),
        ],
    );
    assert!(!game.move_piece(at(5, 5), at(4, 6)));
}

#[test]
fn test_slider_passes_through_ghost() {
    let mut game = GameMediator::default();
    play(
        &mut game,
        &[
            ((8, 2), (8, 4)),
            ((1, 7), (1, 6)),
            ((8, 1), (8, 3)),
            ((2, 7), (2, 6)),
            ((8, 3), (4, 3)),
            ((2, 6), (2, 5)),
            ((4, 3), (4, 6)),
            ((6, 7), (6, 5)),
        ],
    );
    assert_eq!(game.en_passant_ghost(), Some(at(6, 6)));
    assert!(game.move_piece(at(4, 6), at(8, 6)));
}

#[test]
fn test_knight_landing_on_ghost_captures_nothing() {
    let mut game = GameMediator::default();
    play(
        &mut game,
        &[((7, 1), (6, 3)), ((1, 7), (1, 6)), ((6, 3), (4, 4)), ((5, 7), (5, 5))],
    );
    assert_eq!(game.en_passant_ghost(), Some(at(5, 6)));
    assert!(game.move_piece(at(4, 4), at(5, 6)));
    assert!(game.board().piece_at(at(5, 5)).is_some());
    assert_eq!(game.piece_coordinates(Black).len(), 15);
    assert_eq!(game.en_passant_ghost(), None);
}
