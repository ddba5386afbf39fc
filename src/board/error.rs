//! Error types for board and coordinate construction.

use std::fmt;

use super::Coordinate;

/// Error type for coordinate construction failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateError {
    /// One or both axes are below the minimum of 1. Only the offending
    /// axes are filled in.
    InvalidCoordinate {
        column: Option<i32>,
        row: Option<i32>,
    },
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateError::InvalidCoordinate {
                column: Some(column),
                row: Some(row),
            } => write!(f, "Invalid column <{column}> and row <{row}>"),
            CoordinateError::InvalidCoordinate {
                column: Some(column),
                row: None,
            } => write!(f, "Invalid column <{column}>"),
            CoordinateError::InvalidCoordinate {
                column: None,
                row: Some(row),
            } => write!(f, "Invalid row <{row}>"),
            CoordinateError::InvalidCoordinate {
                column: None,
                row: None,
            } => write!(f, "Invalid coordinate"),
        }
    }
}

impl std::error::Error for CoordinateError {}

/// Error type for board construction and checked access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardError {
    /// Both dimensions must be at least 1
    InvalidDimensions { columns: i32, rows: i32 },
    /// Coordinate lies outside the board
    OutOfBounds { coordinate: Coordinate },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidDimensions { columns, rows } => {
                write!(f, "Invalid board dimensions {columns}x{rows}")
            }
            BoardError::OutOfBounds { coordinate } => {
                write!(f, "Coordinate {coordinate} is outside the board")
            }
        }
    }
}

impl std::error::Error for BoardError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_column_message() {
        let err = CoordinateError::InvalidCoordinate {
            column: Some(-1),
            row: None,
        };
        assert_eq!(err.to_string(), "Invalid column <-1>");
    }

    #[test]
    fn test_invalid_row_message() {
        let err = CoordinateError::InvalidCoordinate {
            column: None,
            row: Some(-1),
        };
        assert_eq!(err.to_string(), "Invalid row <-1>");
    }

    #[test]
    fn test_invalid_column_and_row_message() {
        let err = CoordinateError::InvalidCoordinate {
            column: Some(-1),
            row: Some(-1),
        };
        assert_eq!(err.to_string(), "Invalid column <-1> and row <-1>");
    }

    #[test]
    fn test_board_error_out_of_bounds() {
        let coordinate = Coordinate::new(9, 1).unwrap();
        let err = BoardError::OutOfBounds { coordinate };
        assert!(err.to_string().contains("(9, 1)"));
    }

    #[test]
    fn test_board_error_dimensions() {
        let err = BoardError::InvalidDimensions {
            columns: 0,
            rows: 8,
        };
        assert!(err.to_string().contains("0x8"));
    }
}
