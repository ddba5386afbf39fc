//! Construction collaborators for boards and promoted pieces.

use crate::board::{standard_position, Board, BoardBuilder, BoardError, Piece, PieceKind, Team};

/// Produces the board a game starts from.
pub trait BoardFactory {
    fn create_board(&self) -> Result<Board, BoardError>;
}

/// The standard 8x8 starting position.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardBoardFactory;

impl BoardFactory for StandardBoardFactory {
    fn create_board(&self) -> Result<Board, BoardError> {
        Ok(standard_position())
    }
}

impl BoardFactory for BoardBuilder {
    fn create_board(&self) -> Result<Board, BoardError> {
        self.build()
    }
}

/// Produces pieces for promotion.
pub trait PieceFactory {
    fn create_piece(&self, team: Team, kind: PieceKind) -> Piece;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct StandardPieceFactory;

impl PieceFactory for StandardPieceFactory {
    fn create_piece(&self, team: Team, kind: PieceKind) -> Piece {
        Piece::new(team, kind)
    }
}
