//! King steps and castling.

use std::collections::BTreeSet;

use super::{filter_candidates, CheckJudge, MovementData, MovementJudge};
use crate::board::{Coordinate, PieceKind, Vector};

/// King rules: a single step in any direction, or castling.
#[derive(Clone, Copy, Debug, Default)]
pub struct KingJudge;

impl KingJudge {
    /// The plain one-square rule. Used for attack probes, which must never
    /// consider castling.
    #[must_use]
    pub fn is_step_move(data: &MovementData<'_>) -> bool {
        data.mover().is_some() && data.origin.vector_to(data.destination).is_king_step()
    }

    /// True if the defending king is moving two squares along its row.
    #[must_use]
    pub fn is_castling(data: &MovementData<'_>) -> bool {
        let v = data.origin.vector_to(data.destination);
        data.moves_defending_king() && v.dy == 0 && v.dx.abs() == 2
    }

    /// The rook's tile for this castling move: the board edge on the side
    /// the king travels to.
    #[must_use]
    pub fn castling_rook_origin(data: &MovementData<'_>) -> Coordinate {
        let column = if data.destination.column() < data.origin.column() {
            Coordinate::MIN
        } else {
            data.board.columns()
        };
        Coordinate::new_unchecked(column, data.origin.row())
    }

    /// Where the rook lands: the square the king passes over.
    #[must_use]
    pub fn castling_rook_destination(data: &MovementData<'_>) -> Coordinate {
        let step = data.origin.vector_to(data.destination).unit();
        data.origin.translate(step)
    }

    fn is_legal_castle(data: &MovementData<'_>) -> bool {
        if !Self::is_castling(data) {
            return false;
        }
        let Some(king) = data.mover() else {
            return false;
        };
        if data.has_moved(king.id()) || !data.board.is_vacant(data.destination) {
            return false;
        }

        let rook_origin = Self::castling_rook_origin(data);
        let rook_ready = data.board.piece_at(rook_origin).is_some_and(|rook| {
            rook.kind() == PieceKind::Rook && rook.team() == king.team() && !data.has_moved(rook.id())
        });
        if !rook_ready {
            return false;
        }
        if !data
            .origin
            .squares_between(rook_origin)
            .all(|square| data.board.is_vacant(square))
        {
            return false;
        }

        // The king may not castle out of, through, or into an attack.
        let passed = Self::castling_rook_destination(data);
        [data.origin, passed, data.destination]
            .into_iter()
            .all(|square| CheckJudge.is_legal_move(&data.to(square)))
    }
}

impl MovementJudge for KingJudge {
    fn is_legal_move(&self, data: &MovementData<'_>) -> bool {
        Self::is_step_move(data) || Self::is_legal_castle(data)
    }

    fn possible_moves(&self, data: &MovementData<'_>) -> BTreeSet<Coordinate> {
        let steps = Vector::KING_MOVES.map(|v| data.origin.translate(v));
        let castles = [Vector::new(2, 0), Vector::new(-2, 0)].map(|v| data.origin.translate(v));
        filter_candidates(self, data, steps.into_iter().chain(castles))
    }
}
