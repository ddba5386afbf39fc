//! Pawn movement, double steps, en passant and promotion detection.

use std::collections::BTreeSet;

use super::{filter_candidates, MovementData, MovementJudge};
use crate::board::{Coordinate, PieceKind, Vector};

/// Pawn rules. Direction comes from the pawn's team.
#[derive(Clone, Copy, Debug, Default)]
pub struct PawnJudge;

impl PawnJudge {
    /// True if a pawn is moving two squares straight forward.
    #[must_use]
    pub fn is_move_two_forward(data: &MovementData<'_>) -> bool {
        let Some(pawn) = data.moving_piece().filter(|p| p.kind() == PieceKind::Pawn) else {
            return false;
        };
        data.origin.vector_to(data.destination) == Vector::new(0, 2 * pawn.team().pawn_direction())
    }

    /// True if a pawn is moving diagonally forward onto the ghost square.
    #[must_use]
    pub fn is_en_passant_attack(data: &MovementData<'_>) -> bool {
        let Some(pawn) = data.moving_piece().filter(|p| p.kind() == PieceKind::Pawn) else {
            return false;
        };
        let v = data.origin.vector_to(data.destination);
        v.dx.abs() == 1
            && v.dy == pawn.team().pawn_direction()
            && data.target().is_some_and(|target| target.is_ghost())
    }

    /// The square a double step passes over.
    #[must_use]
    pub fn en_passant_ghost_coordinate(data: &MovementData<'_>) -> Coordinate {
        let step = data.origin.vector_to(data.destination).unit();
        data.origin.translate(step)
    }

    /// The square of the pawn captured by an en-passant attack: one rank
    /// behind the destination, seen from the attacker.
    #[must_use]
    pub fn en_passant_capture_coordinate(data: &MovementData<'_>) -> Coordinate {
        let forward = data.origin.vector_to(data.destination).dy.signum();
        data.destination.translate(Vector::new(0, -forward))
    }

    /// True if a pawn lands on the far rank of its team.
    #[must_use]
    pub fn is_promotion(data: &MovementData<'_>) -> bool {
        let Some(pawn) = data.moving_piece().filter(|p| p.kind() == PieceKind::Pawn) else {
            return false;
        };
        let far_row = if pawn.team().pawn_direction() > 0 {
            data.board.rows()
        } else {
            Coordinate::MIN
        };
        data.board.contains(data.destination) && data.destination.is_in_row(far_row)
    }

    fn captured_en_passant(data: &MovementData<'_>) -> bool {
        let Some(pawn) = data.moving_piece() else {
            return false;
        };
        let victim = Self::en_passant_capture_coordinate(data);
        data.board.contains(victim)
            && data
                .board
                .piece_at(victim)
                .is_some_and(|p| p.kind() == PieceKind::Pawn && pawn.is_enemy_of(&p))
    }
}

impl MovementJudge for PawnJudge {
    fn is_legal_move(&self, data: &MovementData<'_>) -> bool {
        let Some(pawn) = data.mover() else {
            return false;
        };
        let forward = pawn.team().pawn_direction();
        let v = data.origin.vector_to(data.destination);
        let board = data.board;

        if v.dx == 0 && v.dy == forward {
            board.is_vacant(data.destination)
        } else if v.dx == 0 && v.dy == 2 * forward {
            !data.has_moved(pawn.id())
                && board.is_vacant(Self::en_passant_ghost_coordinate(data))
                && board.is_vacant(data.destination)
        } else if v.dx.abs() == 1 && v.dy == forward {
            data.captures_enemy(&pawn)
                || (Self::is_en_passant_attack(data) && Self::captured_en_passant(data))
        } else {
            false
        }
    }

    fn possible_moves(&self, data: &MovementData<'_>) -> BTreeSet<Coordinate> {
        let Some(pawn) = data.moving_piece() else {
            return BTreeSet::new();
        };
        let forward = pawn.team().pawn_direction();
        let candidates = [
            Vector::new(0, forward),
            Vector::new(0, 2 * forward),
            Vector::new(-1, forward),
            Vector::new(1, forward),
        ]
        .map(|v| data.origin.translate(v));
        filter_candidates(self, data, candidates)
    }
}
