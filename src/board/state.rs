use super::error::BoardError;
use super::{Coordinate, Piece, Team};

/// A rectangular grid of tiles, each holding at most one piece.
///
/// Cloning is deep: pieces are plain values, so a clone can be mutated to
/// simulate a move without touching the original.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    columns: i32,
    rows: i32,
    tiles: Vec<Option<Piece>>,
}

impl Board {
    /// Width and height of a standard chess board
    pub const STANDARD_SIZE: i32 = 8;

    /// Create an empty board of the given size.
    pub fn new(columns: i32, rows: i32) -> Result<Self, BoardError> {
        if columns < Coordinate::MIN || rows < Coordinate::MIN {
            return Err(BoardError::InvalidDimensions { columns, rows });
        }
        let len = (columns as usize) * (rows as usize);
        Ok(Board {
            columns,
            rows,
            tiles: vec![None; len],
        })
    }

    /// Create an empty 8x8 board.
    #[must_use]
    pub fn standard() -> Self {
        Board {
            columns: Self::STANDARD_SIZE,
            rows: Self::STANDARD_SIZE,
            tiles: vec![None; (Self::STANDARD_SIZE * Self::STANDARD_SIZE) as usize],
        }
    }

    #[inline]
    #[must_use]
    pub const fn columns(&self) -> i32 {
        self.columns
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> i32 {
        self.rows
    }

    /// True if the coordinate lies on this board
    #[inline]
    #[must_use]
    pub const fn contains(&self, coord: Coordinate) -> bool {
        coord.column() >= Coordinate::MIN
            && coord.column() <= self.columns
            && coord.row() >= Coordinate::MIN
            && coord.row() <= self.rows
    }

    #[inline]
    fn index(&self, coord: Coordinate) -> Option<usize> {
        if !self.contains(coord) {
            return None;
        }
        let column = (coord.column() - Coordinate::MIN) as usize;
        let row = (coord.row() - Coordinate::MIN) as usize;
        Some(row * self.columns as usize + column)
    }

    #[inline]
    fn checked_index(&self, coord: Coordinate) -> usize {
        match self.index(coord) {
            Some(idx) => idx,
            None => panic!(
                "coordinate {coord} is outside the {}x{} board",
                self.columns, self.rows
            ),
        }
    }

    /// Piece on `coord`, if any.
    ///
    /// # Panics
    /// Panics if `coord` is outside the board.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, coord: Coordinate) -> Option<Piece> {
        self.tiles[self.checked_index(coord)]
    }

    /// Non-panicking variant of [`Board::piece_at`].
    pub fn try_piece_at(&self, coord: Coordinate) -> Result<Option<Piece>, BoardError> {
        self.index(coord)
            .map(|idx| self.tiles[idx])
            .ok_or(BoardError::OutOfBounds { coordinate: coord })
    }

    /// Replace the tile's content, returning what was there.
    ///
    /// # Panics
    /// Panics if `coord` is outside the board.
    pub fn set(&mut self, coord: Coordinate, piece: Option<Piece>) -> Option<Piece> {
        let idx = self.checked_index(coord);
        std::mem::replace(&mut self.tiles[idx], piece)
    }

    /// Put `piece` on `coord`, returning the previous occupant.
    ///
    /// # Panics
    /// Panics if `coord` is outside the board.
    pub fn place(&mut self, coord: Coordinate, piece: Piece) -> Option<Piece> {
        self.set(coord, Some(piece))
    }

    /// Empty the tile, returning its previous occupant.
    ///
    /// # Panics
    /// Panics if `coord` is outside the board.
    pub fn take(&mut self, coord: Coordinate) -> Option<Piece> {
        self.set(coord, None)
    }

    /// Move whatever stands on `origin` to `destination`, returning the
    /// displaced occupant of `destination`.
    ///
    /// # Panics
    /// Panics if either coordinate is outside the board.
    pub(crate) fn relocate(&mut self, origin: Coordinate, destination: Coordinate) -> Option<Piece> {
        let piece = self.take(origin);
        self.set(destination, piece)
    }

    /// True if the tile is empty or only holds the en-passant ghost.
    ///
    /// # Panics
    /// Panics if `coord` is outside the board.
    #[inline]
    #[must_use]
    pub fn is_vacant(&self, coord: Coordinate) -> bool {
        self.piece_at(coord).map_or(true, |piece| piece.is_ghost())
    }

    /// Every coordinate on the board, row by row from row 1.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (Coordinate::MIN..=self.rows).flat_map(move |row| {
            (Coordinate::MIN..=self.columns).map(move |column| Coordinate::new_unchecked(column, row))
        })
    }

    /// Every occupied tile, ghost included.
    pub fn pieces(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        self.coordinates()
            .zip(self.tiles.iter())
            .filter_map(|(coord, tile)| tile.map(|piece| (coord, piece)))
    }

    /// Tiles holding pieces of `team`.
    pub fn pieces_of(&self, team: Team) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.team() == team)
    }

    /// Number of occupied tiles, ghost included.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}
