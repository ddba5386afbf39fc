//! Sliding pieces: bishop, rook and queen.

use std::collections::BTreeSet;

use super::{filter_candidates, MovementData, MovementJudge};
use crate::board::{Board, Coordinate, Vector};

/// A clear line move along one of the allowed shapes.
fn slides(data: &MovementData<'_>, straight: bool, diagonal: bool) -> bool {
    if data.mover().is_none() {
        return false;
    }
    let v = data.origin.vector_to(data.destination);
    let shape_ok = (straight && v.is_straight()) || (diagonal && v.is_diagonal());
    shape_ok
        && data
            .origin
            .squares_between(data.destination)
            .all(|square| data.board.is_vacant(square))
}

/// Every on-board square along `directions` up to the edge.
fn rays<'a>(
    origin: Coordinate,
    board: &'a Board,
    directions: &'a [Vector],
) -> impl Iterator<Item = Coordinate> + 'a {
    directions.iter().flat_map(move |&dir| {
        (1..)
            .map(move |i| origin.translate(dir * i))
            .take_while(move |c| board.contains(*c))
    })
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BishopJudge;

impl MovementJudge for BishopJudge {
    fn is_legal_move(&self, data: &MovementData<'_>) -> bool {
        slides(data, false, true)
    }

    fn possible_moves(&self, data: &MovementData<'_>) -> BTreeSet<Coordinate> {
        filter_candidates(self, data, rays(data.origin, data.board, &Vector::BISHOP_DIRECTIONS))
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct RookJudge;

impl MovementJudge for RookJudge {
    fn is_legal_move(&self, data: &MovementData<'_>) -> bool {
        slides(data, true, false)
    }

    fn possible_moves(&self, data: &MovementData<'_>) -> BTreeSet<Coordinate> {
        filter_candidates(self, data, rays(data.origin, data.board, &Vector::ROOK_DIRECTIONS))
    }
}

/// Queen rules: whatever a rook or a bishop could do from the same tile.
#[derive(Clone, Copy, Debug, Default)]
pub struct QueenJudge;

impl MovementJudge for QueenJudge {
    fn is_legal_move(&self, data: &MovementData<'_>) -> bool {
        RookJudge.is_legal_move(data) || BishopJudge.is_legal_move(data)
    }

    fn possible_moves(&self, data: &MovementData<'_>) -> BTreeSet<Coordinate> {
        let mut moves = RookJudge.possible_moves(data);
        moves.extend(BishopJudge.possible_moves(data));
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, PieceKind::*, Team::*};
    use crate::judge::test_util::{at, board_with, coords};

    #[test]
    fn test_bishop_diagonals_on_empty_board() {
        let board = board_with(&[(1, 1, White, Bishop)]);
        let data = MovementData::new(at(1, 1), at(1, 1), &board);
        let expected: BTreeSet<_> = (2..=8).map(|i| at(i, i)).collect();
        assert_eq!(BishopJudge.possible_moves(&data), expected);
    }

    #[test]
    fn test_bishop_stops_at_blockers() {
        let board = board_with(&[
            (4, 4, White, Bishop),
            (6, 6, Black, Pawn),
            (2, 2, White, Pawn),
            (3, 5, White, Knight),
        ]);
        let data = MovementData::new(at(4, 4), at(4, 4), &board);
        assert_eq!(
            BishopJudge.possible_moves(&data),
            coords(&[(5, 5), (6, 6), (3, 3), (5, 3), (6, 2), (7, 1)])
        );
    }

    #[test]
    fn test_rook_lines() {
        let board = board_with(&[(1, 1, White, Rook), (1, 4, Black, Pawn), (3, 1, White, King)]);
        let data = MovementData::new(at(1, 1), at(1, 1), &board);
        assert_eq!(
            RookJudge.possible_moves(&data),
            coords(&[(1, 2), (1, 3), (1, 4), (2, 1)])
        );
    }

    #[test]
    fn test_rook_cannot_jump() {
        let board = board_with(&[(1, 1, White, Rook), (1, 2, White, Pawn)]);
        let data = MovementData::new(at(1, 1), at(1, 5), &board);
        assert!(!RookJudge.is_legal_move(&data));
    }

    #[test]
    fn test_queen_from_center_of_empty_board() {
        let board = board_with(&[(4, 4, White, Queen)]);
        let data = MovementData::new(at(4, 4), at(4, 4), &board);
        // 14 straight + 13 diagonal squares
        assert_eq!(QueenJudge.possible_moves(&data).len(), 27);
    }

    #[test]
    fn test_queen_rejects_knight_shape() {
        let board = board_with(&[(4, 4, White, Queen)]);
        let data = MovementData::new(at(4, 4), at(5, 6), &board);
        assert!(!QueenJudge.is_legal_move(&data));
    }

    #[test]
    fn test_ghost_is_transparent_for_sliders() {
        let mut board = board_with(&[(1, 3, White, Rook)]);
        board.place(at(4, 3), Piece::ghost());
        let through = MovementData::new(at(1, 3), at(8, 3), &board);
        let onto = MovementData::new(at(1, 3), at(4, 3), &board);
        assert!(RookJudge.is_legal_move(&through));
        assert!(RookJudge.is_legal_move(&onto));
    }
}
