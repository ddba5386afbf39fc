//! Chess rules engine.
//!
//! Decides whether a proposed move is legal under full chess semantics
//! (piece movement, check, castling, en passant, promotion, turn order) and
//! detects checkmate and stalemate.
//!
//! # Example
//! ```
//! use chess_judge::{Coordinate, GameMediator};
//!
//! let mut game = GameMediator::default();
//! let e2 = Coordinate::new(5, 2).unwrap();
//! let e4 = Coordinate::new(5, 4).unwrap();
//! assert!(game.move_piece(e2, e4));
//! ```

#[macro_use]
mod logging;

pub mod board;
pub mod game;
pub mod judge;

pub use board::{Board, BoardBuilder, Coordinate, Piece, PieceId, PieceKind, Team, Vector};
pub use game::{
    BoardFactory, GameMediator, GameOutcome, GameState, PieceFactory, SelectedPromotion,
    StandardBoardFactory, StandardPieceFactory,
};
pub use judge::{CheckJudge, CheckStatus, ChessJudge, MovementData, MovementJudge};
