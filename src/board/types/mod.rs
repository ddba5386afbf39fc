//! Core board types.
//!
//! - `Coordinate` and `Vector` - board positions and displacements
//! - `Piece`, `PieceKind`, `PieceId` and `Team` - what stands on a tile

mod coordinate;
mod piece;

pub use coordinate::{Coordinate, Vector};
pub use piece::{Piece, PieceId, PieceKind, Team};
