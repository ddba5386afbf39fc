//! Move legality judges.
//!
//! Each piece kind has a judge implementing [`MovementJudge`] with the plain
//! movement rules of that kind. [`CheckJudge`] answers whether a move leaves
//! the mover's own king attacked, and [`ChessJudge`] combines both into full
//! legality.
//!
//! # Example
//! ```
//! use chess_judge::board::{standard_position, Coordinate};
//! use chess_judge::judge::{ChessJudge, MovementData, MovementJudge};
//!
//! let board = standard_position();
//! let g1 = Coordinate::new(7, 1).unwrap();
//! let data = MovementData::new(g1, g1, &board);
//! let moves = ChessJudge.possible_moves(&data);
//! assert_eq!(moves.len(), 2);
//! ```

use std::collections::BTreeSet;

use crate::board::Coordinate;

mod check;
mod composite;
mod data;
mod kings;
mod knights;
mod pawns;
mod sliders;

pub use check::{CheckJudge, CheckStatus};
pub use composite::ChessJudge;
pub use data::{MovementData, TeamPieces};
pub use kings::KingJudge;
pub use knights::KnightJudge;
pub use pawns::PawnJudge;
pub use sliders::{BishopJudge, QueenJudge, RookJudge};

/// Legality rules for a piece or for a whole position.
pub trait MovementJudge {
    /// True if moving from `data.origin` to `data.destination` is allowed.
    fn is_legal_move(&self, data: &MovementData<'_>) -> bool;

    /// Every destination reachable from `data.origin`.
    /// `data.destination` is ignored.
    fn possible_moves(&self, data: &MovementData<'_>) -> BTreeSet<Coordinate>;
}

/// Keep the on-board candidates the judge accepts.
pub(crate) fn filter_candidates<J, I>(
    judge: &J,
    data: &MovementData<'_>,
    candidates: I,
) -> BTreeSet<Coordinate>
where
    J: MovementJudge + ?Sized,
    I: IntoIterator<Item = Coordinate>,
{
    candidates
        .into_iter()
        .filter(|&dest| data.board.contains(dest) && judge.is_legal_move(&data.to(dest)))
        .collect()
}

#[cfg(test)]
pub(crate) mod test_util {
    use crate::board::{Board, BoardBuilder, Coordinate, PieceKind, Team};

    pub fn at(column: i32, row: i32) -> Coordinate {
        Coordinate::new(column, row).unwrap()
    }

    /// Build an 8x8 board from `(column, row, team, kind)` tuples.
    pub fn board_with(pieces: &[(i32, i32, Team, PieceKind)]) -> Board {
        pieces
            .iter()
            .fold(BoardBuilder::new(), |builder, &(c, r, team, kind)| {
                builder.piece(at(c, r), team, kind)
            })
            .build()
            .unwrap()
    }

    pub fn coords(list: &[(i32, i32)]) -> std::collections::BTreeSet<Coordinate> {
        list.iter().map(|&(c, r)| at(c, r)).collect()
    }
}
