//! Movement data: everything a legality check needs for one candidate move.

use crate::board::{Board, Coordinate, Piece, PieceId, PieceKind, Team};

/// Coordinates of one team's pieces, with the king tracked separately.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TeamPieces {
    pub king: Option<Coordinate>,
    pub pieces: Vec<Coordinate>,
}

impl TeamPieces {
    /// Collect the pieces of `team` from `board`. The first king found,
    /// scanning from row 1, is the guarded one; any other king is listed
    /// with the ordinary pieces.
    #[must_use]
    pub fn scan(board: &Board, team: Team) -> Self {
        let mut index = TeamPieces::default();
        for (coord, piece) in board.pieces_of(team) {
            if piece.kind() == PieceKind::King && index.king.is_none() {
                index.king = Some(coord);
            } else {
                index.pieces.push(coord);
            }
        }
        index
    }

    /// Drop `coord` from the non-king list. Returns whether it was present.
    pub fn remove(&mut self, coord: Coordinate) -> bool {
        match self.pieces.iter().position(|c| *c == coord) {
            Some(idx) => {
                self.pieces.swap_remove(idx);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.king == Some(coord) || self.pieces.contains(&coord)
    }
}

/// A candidate move and its context.
///
/// All context is borrowed, so the value is `Copy`. Simulation steps derive
/// new values with the `from`/`to`/`with_*` methods instead of
/// mutating shared state.
#[derive(Clone, Copy, Debug)]
pub struct MovementData<'a> {
    pub origin: Coordinate,
    pub destination: Coordinate,
    pub board: &'a Board,
    /// Ids of every piece that has moved at least once
    pub moved_pieces: &'a [PieceId],
    /// King of the moving side
    pub defending_king: Option<Coordinate>,
    pub enemy_king: Option<Coordinate>,
    /// Non-king pieces of the opponent
    pub enemy_pieces: &'a [Coordinate],
    /// Non-king pieces of the moving side
    pub ally_pieces: &'a [Coordinate],
    /// When set, only pieces of this team may move
    pub side_to_move: Option<Team>,
}

impl<'a> MovementData<'a> {
    /// Bare movement data with no history and no team context.
    #[must_use]
    pub fn new(origin: Coordinate, destination: Coordinate, board: &'a Board) -> Self {
        MovementData {
            origin,
            destination,
            board,
            moved_pieces: &[],
            defending_king: None,
            enemy_king: None,
            enemy_pieces: &[],
            ally_pieces: &[],
            side_to_move: None,
        }
    }

    #[must_use]
    pub fn from(mut self, origin: Coordinate) -> Self {
        self.origin = origin;
        self
    }

    #[must_use]
    pub fn to(mut self, destination: Coordinate) -> Self {
        self.destination = destination;
        self
    }

    /// Same move and context evaluated against another board.
    #[must_use]
    pub fn with_board<'b>(self, board: &'b Board) -> MovementData<'b>
    where
        'a: 'b,
    {
        MovementData {
            origin: self.origin,
            destination: self.destination,
            board,
            moved_pieces: self.moved_pieces,
            defending_king: self.defending_king,
            enemy_king: self.enemy_king,
            enemy_pieces: self.enemy_pieces,
            ally_pieces: self.ally_pieces,
            side_to_move: self.side_to_move,
        }
    }

    #[must_use]
    pub fn with_moved_pieces(mut self, moved_pieces: &'a [PieceId]) -> Self {
        self.moved_pieces = moved_pieces;
        self
    }

    #[must_use]
    pub fn with_defending_king_on(mut self, coord: Coordinate) -> Self {
        self.defending_king = Some(coord);
        self
    }

    #[must_use]
    pub fn with_enemy_king_on(mut self, coord: Coordinate) -> Self {
        self.enemy_king = Some(coord);
        self
    }

    #[must_use]
    pub fn with_enemy_pieces_on(mut self, coords: &'a [Coordinate]) -> Self {
        self.enemy_pieces = coords;
        self
    }

    #[must_use]
    pub fn with_ally_pieces_on(mut self, coords: &'a [Coordinate]) -> Self {
        self.ally_pieces = coords;
        self
    }

    #[must_use]
    pub fn with_side_to_move(mut self, team: Team) -> Self {
        self.side_to_move = Some(team);
        self
    }

    /// Fill in king, ally and enemy context from two team indices.
    #[must_use]
    pub fn with_teams(mut self, allies: &'a TeamPieces, enemies: &'a TeamPieces) -> Self {
        self.defending_king = allies.king;
        self.ally_pieces = &allies.pieces;
        self.enemy_king = enemies.king;
        self.enemy_pieces = &enemies.pieces;
        self
    }

    /// The non-ghost piece on the origin tile, if the origin is on the board.
    #[inline]
    #[must_use]
    pub fn moving_piece(&self) -> Option<Piece> {
        if !self.board.contains(self.origin) {
            return None;
        }
        self.board.piece_at(self.origin).filter(|piece| !piece.is_ghost())
    }

    /// Whatever stands on the destination tile, ghost included.
    #[inline]
    #[must_use]
    pub fn target(&self) -> Option<Piece> {
        if !self.board.contains(self.destination) {
            return None;
        }
        self.board.piece_at(self.destination)
    }

    #[inline]
    #[must_use]
    pub fn has_moved(&self, id: PieceId) -> bool {
        self.moved_pieces.contains(&id)
    }

    /// The mover, provided the move is structurally possible for any
    /// piece: both tiles on the board, distinct, a real piece on the
    /// origin, and no piece of the mover's own team on the destination.
    #[must_use]
    pub(crate) fn mover(&self) -> Option<Piece> {
        if self.origin == self.destination || !self.board.contains(self.destination) {
            return None;
        }
        let mover = self.moving_piece()?;
        match self.target() {
            Some(target) if target.team() == mover.team() => None,
            _ => Some(mover),
        }
    }

    /// True if the origin holds the king being defended. Without a known
    /// king square any king counts; otherwise only the piece on that square
    /// does, so a king gained by promotion is an ordinary piece.
    #[must_use]
    pub(crate) fn moves_defending_king(&self) -> bool {
        let is_king = self
            .moving_piece()
            .is_some_and(|piece| piece.kind() == PieceKind::King);
        is_king && self.defending_king.map_or(true, |king| king == self.origin)
    }

    /// True if the destination holds a piece of the opposing team.
    #[must_use]
    pub(crate) fn captures_enemy(&self, mover: &Piece) -> bool {
        self.target().is_some_and(|target| mover.is_enemy_of(&target))
    }
}
