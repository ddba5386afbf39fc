//! Fluent builder for constructing board positions.
//!
//! # Example
//! ```
//! use chess_judge::board::{BoardBuilder, Coordinate, PieceKind, Team};
//!
//! let e1 = Coordinate::new(5, 1).unwrap();
//! let e8 = Coordinate::new(5, 8).unwrap();
//! let board = BoardBuilder::new()
//!     .piece(e1, Team::White, PieceKind::King)
//!     .piece(e8, Team::Black, PieceKind::King)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.piece_count(), 2);
//! ```

use once_cell::sync::Lazy;

use super::error::BoardError;
use super::{Board, Coordinate, Piece, PieceKind, Team};

/// Piece placement of the standard starting position on an 8x8 board.
static STANDARD_LAYOUT: Lazy<Vec<(Coordinate, Team, PieceKind)>> = Lazy::new(|| {
    let mut layout = Vec::with_capacity(32);
    for (i, &kind) in PieceKind::BACK_RANK.iter().enumerate() {
        let column = i as i32 + 1;
        layout.push((Coordinate::new_unchecked(column, 1), Team::White, kind));
        layout.push((Coordinate::new_unchecked(column, 2), Team::White, PieceKind::Pawn));
        layout.push((Coordinate::new_unchecked(column, 7), Team::Black, PieceKind::Pawn));
        layout.push((Coordinate::new_unchecked(column, 8), Team::Black, kind));
    }
    layout
});

/// The standard starting position with freshly created pieces.
#[must_use]
pub fn standard_position() -> Board {
    let mut board = Board::standard();
    for &(coord, team, kind) in STANDARD_LAYOUT.iter() {
        board.place(coord, Piece::new(team, kind));
    }
    board
}

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    columns: i32,
    rows: i32,
    pieces: Vec<(Coordinate, Team, PieceKind)>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a builder for an empty 8x8 board.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            columns: Board::STANDARD_SIZE,
            rows: Board::STANDARD_SIZE,
            pieces: Vec::new(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            pieces: STANDARD_LAYOUT.clone(),
            ..Self::new()
        }
    }

    /// Set the board size.
    #[must_use]
    pub const fn size(mut self, columns: i32, rows: i32) -> Self {
        self.columns = columns;
        self.rows = rows;
        self
    }

    /// Place a piece, replacing anything already on that tile.
    #[must_use]
    pub fn piece(mut self, coord: Coordinate, team: Team, kind: PieceKind) -> Self {
        self.pieces.retain(|(c, _, _)| *c != coord);
        self.pieces.push((coord, team, kind));
        self
    }

    /// Remove a piece from a tile.
    #[must_use]
    pub fn clear(mut self, coord: Coordinate) -> Self {
        self.pieces.retain(|(c, _, _)| *c != coord);
        self
    }

    /// Build the board. Every call creates pieces with fresh ids.
    pub fn build(&self) -> Result<Board, BoardError> {
        let mut board = Board::new(self.columns, self.rows)?;
        for &(coord, team, kind) in &self.pieces {
            if !board.contains(coord) {
                return Err(BoardError::OutOfBounds { coordinate: coord });
            }
            board.place(coord, Piece::new(team, kind));
        }
        Ok(board)
    }
}
