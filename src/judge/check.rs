//! King safety: check detection, simulated moves and check responses.

use std::collections::BTreeSet;

use super::{
    BishopJudge, KingJudge, KnightJudge, MovementData, MovementJudge, PawnJudge, QueenJudge,
    RookJudge,
};
use crate::board::{Board, Coordinate, Piece, PieceKind, Team, Vector};

/// Whether the defending king is attacked, and what can be done about it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckStatus {
    /// The king is not attacked.
    Clear,
    /// The king is attacked by `attackers`. `responses` lists every
    /// destination that answers the check: king escapes plus, against a
    /// single attacker, captures and interpositions.
    Check {
        attackers: Vec<Coordinate>,
        responses: BTreeSet<Coordinate>,
    },
}

impl CheckStatus {
    #[must_use]
    pub fn is_check(&self) -> bool {
        matches!(self, CheckStatus::Check { .. })
    }

    /// True if in check with no way out.
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        matches!(self, CheckStatus::Check { responses, .. } if responses.is_empty())
    }

    #[must_use]
    pub fn attackers(&self) -> &[Coordinate] {
        match self {
            CheckStatus::Clear => &[],
            CheckStatus::Check { attackers, .. } => attackers,
        }
    }

    #[must_use]
    pub fn responses(&self) -> Option<&BTreeSet<Coordinate>> {
        match self {
            CheckStatus::Clear => None,
            CheckStatus::Check { responses, .. } => Some(responses),
        }
    }
}

/// Judges moves purely by whether they leave the mover's king attacked.
#[derive(Clone, Copy, Debug, Default)]
pub struct CheckJudge;

/// Could a piece of `kind` standing on `data.origin` capture on
/// `data.destination` by its plain movement rule?
fn can_capture(kind: PieceKind, data: &MovementData<'_>) -> bool {
    match kind {
        PieceKind::Pawn => PawnJudge.is_legal_move(data),
        PieceKind::Knight => KnightJudge.is_legal_move(data),
        PieceKind::Bishop => BishopJudge.is_legal_move(data),
        PieceKind::Rook => RookJudge.is_legal_move(data),
        PieceKind::Queen => QueenJudge.is_legal_move(data),
        PieceKind::King => KingJudge::is_step_move(data),
    }
}

impl CheckJudge {
    /// Enemy pieces of `defender` on `board` that attack `square`.
    ///
    /// Candidates come from `data.enemy_pieces` and `data.enemy_king`;
    /// entries that no longer hold an enemy piece on `board` are skipped.
    fn attackers_on(
        board: &Board,
        data: &MovementData<'_>,
        square: Coordinate,
        defender: Team,
    ) -> Vec<Coordinate> {
        data.enemy_pieces
            .iter()
            .copied()
            .chain(data.enemy_king)
            .filter(|&coord| board.contains(coord))
            .filter(|&coord| {
                board.piece_at(coord).is_some_and(|piece| {
                    piece.team() == defender.opponent()
                        && can_capture(piece.kind(), &MovementData::new(coord, square, board))
                })
            })
            .collect()
    }

    /// The board after playing `data` on a private copy, with the king square
    /// and team of the side that moved. `None` when there is no king to guard.
    fn simulate(data: &MovementData<'_>) -> Option<(Board, Coordinate, Team)> {
        let mut board = data.board.clone();
        let mover = data.moving_piece();
        if let Some(piece) = mover {
            if board.contains(data.destination) {
                if PawnJudge::is_en_passant_attack(data) {
                    let victim = PawnJudge::en_passant_capture_coordinate(data);
                    if board.contains(victim) {
                        board.take(victim);
                    }
                }
                board.relocate(data.origin, data.destination);
            }
            if data.moves_defending_king() {
                return Some((board, data.destination, piece.team()));
            }
        }
        let king = data.defending_king.filter(|c| board.contains(*c))?;
        let team = board
            .piece_at(king)
            .map(|p| p.team())
            .or(mover.map(|p| p.team()))?;
        Some((board, king, team))
    }

    /// Enemy pieces currently attacking the defending king.
    #[must_use]
    pub fn attackers(&self, data: &MovementData<'_>) -> Vec<Coordinate> {
        let Some(king) = data.defending_king.filter(|c| data.board.contains(*c)) else {
            return Vec::new();
        };
        let Some(defender) = data.board.piece_at(king).map(|p| p.team()) else {
            return Vec::new();
        };
        Self::attackers_on(data.board, data, king, defender)
    }

    /// Squares that would stop the attack of the piece on `attacker`.
    fn blocking_squares(board: &Board, attacker: Coordinate, king: Coordinate) -> Vec<Coordinate> {
        let Some(piece) = board.piece_at(attacker) else {
            return Vec::new();
        };
        let mut squares = vec![attacker];
        if piece.kind().is_slider() {
            squares.extend(attacker.squares_between(king));
        } else if piece.kind() == PieceKind::Pawn {
            // A pawn that just double-stepped can be taken en passant.
            let ghost = attacker.translate(Vector::new(0, -piece.team().pawn_direction()));
            if board.contains(ghost) && board.piece_at(ghost).is_some_and(|p| p.is_ghost()) {
                squares.push(ghost);
            }
        }
        squares
    }

    /// Work out the check status of the defending king.
    #[must_use]
    pub fn responses(&self, data: &MovementData<'_>) -> CheckStatus {
        let attackers = self.attackers(data);
        let Some(king) = data.defending_king.filter(|_| !attackers.is_empty()) else {
            return CheckStatus::Clear;
        };

        let king_data = data.from(king);
        let mut responses: BTreeSet<Coordinate> = Vector::KING_MOVES
            .iter()
            .map(|&v| king.translate(v))
            .filter(|&dest| {
                data.board.contains(dest) && {
                    let step = king_data.to(dest);
                    KingJudge::is_step_move(&step) && self.is_legal_move(&step)
                }
            })
            .collect();

        if let [attacker] = attackers[..] {
            let targets = Self::blocking_squares(data.board, attacker, king);
            for &ally in data.ally_pieces {
                let Some(piece) = ally_piece(data.board, ally, king) else {
                    continue;
                };
                let ally_data = data.from(ally);
                for &target in &targets {
                    let candidate = ally_data.to(target);
                    if can_capture(piece.kind(), &candidate) && self.is_legal_move(&candidate) {
                        responses.insert(target);
                    }
                }
            }
        }

        CheckStatus::Check {
            attackers,
            responses,
        }
    }
}

/// The piece on `coord` if it shares a team with the king on `king`.
fn ally_piece(board: &Board, coord: Coordinate, king: Coordinate) -> Option<Piece> {
    let team = board.piece_at(king)?.team();
    if !board.contains(coord) {
        return None;
    }
    board.piece_at(coord).filter(|p| p.team() == team)
}

impl MovementJudge for CheckJudge {
    /// True if the move leaves the mover's king unattacked.
    fn is_legal_move(&self, data: &MovementData<'_>) -> bool {
        let Some((board, king, team)) = Self::simulate(data) else {
            return true;
        };
        Self::attackers_on(&board, data, king, team).is_empty()
    }

    /// The check responses, empty when not in check.
    fn possible_moves(&self, data: &MovementData<'_>) -> BTreeSet<Coordinate> {
        match self.responses(data) {
            CheckStatus::Clear => BTreeSet::new(),
            CheckStatus::Check { responses, .. } => responses,
        }
    }
}
