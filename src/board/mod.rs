//! Board model: coordinates, pieces and the tile grid.
//!
//! A [`Board`] is a fixed-size grid of tiles addressed by 1-based
//! [`Coordinate`]s. Each tile holds at most one [`Piece`]. Boards are cheap
//! to clone, which is how move simulation works.
//!
//! # Example
//! ```
//! use chess_judge::board::{standard_position, Coordinate, PieceKind, Team};
//!
//! let board = standard_position();
//! let e1 = Coordinate::new(5, 1).unwrap();
//! let king = board.piece_at(e1).unwrap();
//! assert_eq!((king.team(), king.kind()), (Team::White, PieceKind::King));
//! ```

mod builder;
mod display;
mod error;
pub mod prelude;
mod state;
mod types;

pub use builder::{standard_position, BoardBuilder};
pub use error::{BoardError, CoordinateError};
pub use state::Board;
pub use types::{Coordinate, Piece, PieceId, PieceKind, Team, Vector};
