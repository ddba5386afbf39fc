//! Full legality: per-kind movement rules plus king safety.

use std::collections::BTreeSet;

use super::{
    BishopJudge, CheckJudge, KingJudge, KnightJudge, MovementData, MovementJudge, PawnJudge,
    QueenJudge, RookJudge,
};
use crate::board::{Coordinate, Piece, PieceKind};

/// The judge used by the game: a move is legal if the moving piece's own
/// rules allow it and it does not leave its king attacked.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChessJudge;

/// The movement judge for a piece kind.
#[must_use]
pub(crate) fn judge_for(kind: PieceKind) -> &'static dyn MovementJudge {
    match kind {
        PieceKind::Pawn => &PawnJudge,
        PieceKind::Knight => &KnightJudge,
        PieceKind::Bishop => &BishopJudge,
        PieceKind::Rook => &RookJudge,
        PieceKind::Queen => &QueenJudge,
        PieceKind::King => &KingJudge,
    }
}

impl ChessJudge {
    /// The mover, if it may move at all: a real piece of the side to move.
    fn eligible_mover(data: &MovementData<'_>) -> Option<Piece> {
        data.moving_piece()
            .filter(|piece| data.side_to_move.map_or(true, |team| team == piece.team()))
    }

    /// Every legal `(origin, destination)` pair for the side whose king and
    /// pieces are `data.defending_king` and `data.ally_pieces`.
    #[must_use]
    pub fn legal_moves(&self, data: &MovementData<'_>) -> Vec<(Coordinate, Coordinate)> {
        data.ally_pieces
            .iter()
            .copied()
            .chain(data.defending_king)
            .flat_map(|origin| {
                self.possible_moves(&data.from(origin))
                    .into_iter()
                    .map(move |dest| (origin, dest))
            })
            .collect()
    }

    /// True if the side has any legal move. Stops at the first one found.
    #[must_use]
    pub fn has_any_legal_move(&self, data: &MovementData<'_>) -> bool {
        data.ally_pieces
            .iter()
            .copied()
            .chain(data.defending_king)
            .any(|origin| !self.possible_moves(&data.from(origin)).is_empty())
    }
}

impl MovementJudge for ChessJudge {
    fn is_legal_move(&self, data: &MovementData<'_>) -> bool {
        let Some(piece) = Self::eligible_mover(data) else {
            return false;
        };
        if !data.board.contains(data.destination) {
            return false;
        }
        judge_for(piece.kind()).is_legal_move(data) && CheckJudge.is_legal_move(data)
    }

    fn possible_moves(&self, data: &MovementData<'_>) -> BTreeSet<Coordinate> {
        let Some(piece) = Self::eligible_mover(data) else {
            return BTreeSet::new();
        };
        judge_for(piece.kind())
            .possible_moves(data)
            .into_iter()
            .filter(|&dest| CheckJudge.is_legal_move(&data.to(dest)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{standard_position, Board, Team, Team::*, PieceKind::*};
    use crate::judge::test_util::{at, board_with, coords};
    use crate::judge::TeamPieces;

    fn legal_moves(board: &Board, team: Team) -> Vec<(Coordinate, Coordinate)> {
        let allies = TeamPieces::scan(board, team);
        let enemies = TeamPieces::scan(board, team.opponent());
        let origin = at(1, 1);
        let data = MovementData::new(origin, origin, board)
            .with_teams(&allies, &enemies)
            .with_side_to_move(team);
        ChessJudge.legal_moves(&data)
    }

    #[test]
    fn test_twenty_opening_moves() {
        let board = standard_position();
        assert_eq!(legal_moves(&board, White).len(), 20);
        assert_eq!(legal_moves(&board, Black).len(), 20);
    }

    #[test]
    fn test_wrong_side_to_move_rejected() {
        let board = standard_position();
        let data = MovementData::new(at(5, 7), at(5, 5), &board).with_side_to_move(White);
        assert!(!ChessJudge.is_legal_move(&data));
        assert!(ChessJudge.is_legal_move(&data.with_side_to_move(Black)));
    }

    #[test]
    fn test_empty_and_ghost_origin_rejected() {
        let mut board = standard_position();
        board.place(at(4, 4), crate::board::Piece::ghost());
        assert!(!ChessJudge.is_legal_move(&MovementData::new(at(4, 5), at(4, 6), &board)));
        assert!(!ChessJudge.is_legal_move(&MovementData::new(at(4, 4), at(4, 5), &board)));
        assert!(ChessJudge
            .possible_moves(&MovementData::new(at(4, 4), at(4, 4), &board))
            .is_empty());
    }

    #[test]
    fn test_pinned_knight_has_no_moves() {
        let board = board_with(&[
            (5, 1, White, King),
            (5, 3, White, Knight),
            (5, 8, Black, Queen),
            (1, 8, Black, King),
        ]);
        let allies = TeamPieces::scan(&board, White);
        let enemies = TeamPieces::scan(&board, Black);
        let data = MovementData::new(at(5, 3), at(5, 3), &board).with_teams(&allies, &enemies);
        assert!(ChessJudge.possible_moves(&data).is_empty());
        assert!(!KnightJudge.possible_moves(&data).is_empty());
    }

    #[test]
    fn test_king_moves_exclude_attacked_squares() {
        let board = board_with(&[(5, 1, White, King), (4, 8, Black, Rook), (8, 8, Black, King)]);
        let allies = TeamPieces::scan(&board, White);
        let enemies = TeamPieces::scan(&board, Black);
        let data = MovementData::new(at(5, 1), at(5, 1), &board).with_teams(&allies, &enemies);
        assert_eq!(
            ChessJudge.possible_moves(&data),
            coords(&[(5, 2), (6, 1), (6, 2)])
        );
    }

    #[test]
    fn test_stalemated_side_has_no_moves() {
        let board = board_with(&[(8, 8, Black, King), (6, 7, White, Queen), (6, 6, White, King)]);
        let allies = TeamPieces::scan(&board, Black);
        let enemies = TeamPieces::scan(&board, White);
        let data = MovementData::new(at(8, 8), at(8, 8), &board).with_teams(&allies, &enemies);
        assert!(!ChessJudge.has_any_legal_move(&data));
        assert!(!CheckJudge.responses(&data).is_check());
    }
}
