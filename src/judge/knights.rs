use std::collections::BTreeSet;

use super::{filter_candidates, MovementData, MovementJudge};
use crate::board::{Coordinate, Vector};

/// Knight rules: an L-shaped jump onto an empty or enemy tile.
#[derive(Clone, Copy, Debug, Default)]
pub struct KnightJudge;

impl MovementJudge for KnightJudge {
    fn is_legal_move(&self, data: &MovementData<'_>) -> bool {
        data.mover().is_some() && data.origin.vector_to(data.destination).is_knight_move()
    }

    fn possible_moves(&self, data: &MovementData<'_>) -> BTreeSet<Coordinate> {
        let candidates = Vector::KNIGHT_MOVES.map(|v| data.origin.translate(v));
        filter_candidates(self, data, candidates)
    }
}
