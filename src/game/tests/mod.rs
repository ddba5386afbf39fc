//! Game mediator tests.
//!
//! Tests are organized into separate files by category:
//! - `turns.rs` - Turn order and move rejection
//! - `castling.rs` - Castling through the mediator
//! - `en_passant.rs` - Ghost bookkeeping and en-passant captures
//! - `promotion.rs` - Pending promotion flow
//! - `outcome.rs` - Checkmate and stalemate detection
//! - `proptest.rs` - Property-based tests over random games

use crate::board::{BoardBuilder, Coordinate, PieceKind, Team};
use crate::game::GameMediator;

mod en_passant;
mod turns;

pub(super) fn at(column: i32, row: i32) -> Coordinate {
    Coordinate::new(column, row).unwrap()
}

/// Play a sequence of moves, panicking on the first rejected one.
pub(super) fn play(game: &mut GameMediator, moves: &[((i32, i32), (i32, i32))]) {
    for &((c1, r1), (c2, r2)) in moves {
        assert!(
            game.move_piece(at(c1, r1), at(c2, r2)),
            "move ({c1}, {r1}) -> ({c2}, {r2}) was rejected"
        );
    }
}

/// A game on an 8x8 board holding only the given pieces.
pub(super) fn game_with(pieces: &[(i32, i32, Team, PieceKind)]) -> GameMediator {
    let builder = pieces
        .iter()
        .fold(BoardBuilder::new(), |builder, &(c, r, team, kind)| {
            builder.piece(at(c, r), team, kind)
        });
    GameMediator::new(&builder).unwrap()
}
