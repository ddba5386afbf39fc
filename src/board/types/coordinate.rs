//! Coordinate and vector types.

use std::fmt;
use std::ops::Mul;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::CoordinateError;

/// A tile on the board as (column, row), both 1-based.
///
/// Ordering is by column first, then row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "(i32, i32)", into = "(i32, i32)")
)]
pub struct Coordinate {
    column: i32,
    row: i32,
}

impl Coordinate {
    /// Smallest valid value on either axis
    pub const MIN: i32 = 1;

    /// Create a coordinate, rejecting axes below [`Coordinate::MIN`].
    ///
    /// The upper bound depends on the board and is checked with
    /// [`Board::contains`](crate::Board::contains).
    pub fn new(column: i32, row: i32) -> Result<Self, CoordinateError> {
        let bad_column = (column < Self::MIN).then_some(column);
        let bad_row = (row < Self::MIN).then_some(row);
        if bad_column.is_some() || bad_row.is_some() {
            return Err(CoordinateError::InvalidCoordinate {
                column: bad_column,
                row: bad_row,
            });
        }
        Ok(Coordinate { column, row })
    }

    /// Build from axes already known to be valid (board iteration).
    #[inline]
    pub(crate) const fn new_unchecked(column: i32, row: i32) -> Self {
        Coordinate { column, row }
    }

    #[inline]
    #[must_use]
    pub const fn column(self) -> i32 {
        self.column
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> i32 {
        self.row
    }

    #[inline]
    #[must_use]
    pub const fn is_in_column(self, column: i32) -> bool {
        self.column == column
    }

    #[inline]
    #[must_use]
    pub const fn is_in_row(self, row: i32) -> bool {
        self.row == row
    }

    /// Offset by `vector` without any bounds check.
    ///
    /// The result may be off the board (or even below [`Coordinate::MIN`]);
    /// check it against the board before use.
    #[inline]
    #[must_use]
    pub const fn translate(self, vector: Vector) -> Self {
        Coordinate {
            column: self.column + vector.dx,
            row: self.row + vector.dy,
        }
    }

    /// Displacement from `self` to `other`.
    #[inline]
    #[must_use]
    pub const fn vector_to(self, other: Coordinate) -> Vector {
        Vector {
            dx: other.column - self.column,
            dy: other.row - self.row,
        }
    }

    /// Walk from `self` towards `end` in unit steps, yielding every square
    /// strictly between them. Yields nothing when the two are not on a
    /// shared line or diagonal.
    pub fn squares_between(self, end: Coordinate) -> impl Iterator<Item = Coordinate> {
        let delta = self.vector_to(end);
        let aligned = delta.is_straight() || delta.is_diagonal();
        let step = delta.unit();
        let count = if aligned {
            delta.dx.abs().max(delta.dy.abs()) - 1
        } else {
            0
        };
        (1..=count).map(move |i| self.translate(step * i))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

impl TryFrom<(i32, i32)> for Coordinate {
    type Error = CoordinateError;

    fn try_from((column, row): (i32, i32)) -> Result<Self, Self::Error> {
        Coordinate::new(column, row)
    }
}

impl From<Coordinate> for (i32, i32) {
    fn from(value: Coordinate) -> Self {
        (value.column, value.row)
    }
}

/// A signed displacement between two coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vector {
    pub dx: i32,
    pub dy: i32,
}

impl Vector {
    pub const ZERO: Vector = Vector::new(0, 0);

    pub const KNIGHT_MOVES: [Vector; 8] = [
        Vector::new(1, 2),
        Vector::new(2, 1),
        Vector::new(2, -1),
        Vector::new(1, -2),
        Vector::new(-1, -2),
        Vector::new(-2, -1),
        Vector::new(-2, 1),
        Vector::new(-1, 2),
    ];

    pub const ROOK_DIRECTIONS: [Vector; 4] = [
        Vector::new(1, 0),
        Vector::new(-1, 0),
        Vector::new(0, 1),
        Vector::new(0, -1),
    ];

    pub const BISHOP_DIRECTIONS: [Vector; 4] = [
        Vector::new(1, 1),
        Vector::new(1, -1),
        Vector::new(-1, 1),
        Vector::new(-1, -1),
    ];

    pub const KING_MOVES: [Vector; 8] = [
        Vector::new(1, 0),
        Vector::new(-1, 0),
        Vector::new(0, 1),
        Vector::new(0, -1),
        Vector::new(1, 1),
        Vector::new(1, -1),
        Vector::new(-1, 1),
        Vector::new(-1, -1),
    ];

    #[must_use]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Vector { dx, dy }
    }

    /// Component-wise signum
    #[inline]
    #[must_use]
    pub const fn unit(self) -> Self {
        Vector {
            dx: self.dx.signum(),
            dy: self.dy.signum(),
        }
    }

    /// Absolute value of each component
    #[inline]
    #[must_use]
    pub const fn abs(self) -> Self {
        Vector {
            dx: self.dx.abs(),
            dy: self.dy.abs(),
        }
    }

    /// Non-zero and along a row or column
    #[inline]
    #[must_use]
    pub const fn is_straight(self) -> bool {
        (self.dx == 0) != (self.dy == 0)
    }

    /// Non-zero and along a diagonal
    #[inline]
    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        self.dx != 0 && self.dx.abs() == self.dy.abs()
    }

    #[inline]
    #[must_use]
    pub const fn is_knight_move(self) -> bool {
        let abs = self.abs();
        (abs.dx == 1 && abs.dy == 2) || (abs.dx == 2 && abs.dy == 1)
    }

    #[inline]
    #[must_use]
    pub const fn is_king_step(self) -> bool {
        let abs = self.abs();
        abs.dx <= 1 && abs.dy <= 1 && !(abs.dx == 0 && abs.dy == 0)
    }
}

impl Mul<i32> for Vector {
    type Output = Vector;

    fn mul(self, rhs: i32) -> Vector {
        Vector::new(self.dx * rhs, self.dy * rhs)
    }
}
