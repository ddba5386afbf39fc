use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Coordinate, PieceKind, Team};

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameOutcome {
    Checkmate { winner: Team },
    /// The side to move is not in check and has no legal move.
    Stalemate,
}

impl GameOutcome {
    #[must_use]
    pub const fn winner(self) -> Option<Team> {
        match self {
            GameOutcome::Checkmate { winner } => Some(winner),
            GameOutcome::Stalemate => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameOutcome::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// What the mediator will accept next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameState {
    /// Waiting for a move from the side to move.
    Movement,
    /// A pawn reached the far rank on this square and must be promoted
    /// before play continues.
    PendingPromotion(Coordinate),
    GameOver(GameOutcome),
}

impl GameState {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, GameState::GameOver(_))
    }
}

/// The piece kind a player picked for a promotion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SelectedPromotion(PieceKind);

impl SelectedPromotion {
    #[must_use]
    pub const fn new(kind: PieceKind) -> Self {
        SelectedPromotion(kind)
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> PieceKind {
        self.0
    }
}

impl Default for SelectedPromotion {
    fn default() -> Self {
        SelectedPromotion(PieceKind::Queen)
    }
}

impl From<PieceKind> for SelectedPromotion {
    fn from(kind: PieceKind) -> Self {
        SelectedPromotion(kind)
    }
}
