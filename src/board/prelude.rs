//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_judge::board::prelude::*;
//! ```

pub use super::{
    standard_position, Board, BoardBuilder, BoardError, Coordinate, CoordinateError, Piece,
    PieceKind, Team, Vector,
};
pub use crate::game::{GameMediator, GameOutcome, GameState, SelectedPromotion};
pub use crate::judge::{CheckStatus, ChessJudge, MovementData, MovementJudge};
