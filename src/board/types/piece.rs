//! Piece, piece kind and team types.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds in index order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Promotion choices in order of typical preference (queen first)
    pub const PROMOTION_CHOICES: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Back rank layout of the standard starting position, column 1 first
    pub const BACK_RANK: [PieceKind; 8] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];

    /// Convert to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Returns true for pieces that move along lines (Bishop, Rook, Queen)
    #[inline]
    #[must_use]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Pawn => write!(f, "pawn"),
            PieceKind::Knight => write!(f, "knight"),
            PieceKind::Bishop => write!(f, "bishop"),
            PieceKind::Rook => write!(f, "rook"),
            PieceKind::Queen => write!(f, "queen"),
            PieceKind::King => write!(f, "king"),
        }
    }
}

/// Piece owners. `Ghost` only ever marks the en-passant square.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Team {
    White,
    Black,
    Ghost,
}

impl Team {
    /// The two playing teams, White first
    pub const PLAYERS: [Team; 2] = [Team::White, Team::Black];

    /// Returns the opposing playing team. The ghost has no opponent.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Team {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
            Team::Ghost => Team::Ghost,
        }
    }

    /// Pawn forward direction along rows (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> i32 {
        match self {
            Team::White => 1,
            Team::Black => -1,
            Team::Ghost => 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_player(self) -> bool {
        !matches!(self, Team::Ghost)
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::White => write!(f, "White"),
            Team::Black => write!(f, "Black"),
            Team::Ghost => write!(f, "Ghost"),
        }
    }
}

static NEXT_PIECE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-wide unique piece identity.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceId(u64);

impl PieceId {
    fn next() -> Self {
        PieceId(NEXT_PIECE_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A piece on the board. Its position is whichever tile holds it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    id: PieceId,
    team: Team,
    kind: PieceKind,
}

impl Piece {
    /// Create a piece with a fresh id.
    #[must_use]
    pub fn new(team: Team, kind: PieceKind) -> Self {
        Piece {
            id: PieceId::next(),
            team,
            kind,
        }
    }

    /// Create an en-passant marker.
    #[must_use]
    pub fn ghost() -> Self {
        Piece::new(Team::Ghost, PieceKind::Pawn)
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    #[must_use]
    pub const fn team(&self) -> Team {
        self.team
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn is_ghost(&self) -> bool {
        matches!(self.team, Team::Ghost)
    }

    /// True if `other` belongs to the opposing playing team.
    #[inline]
    #[must_use]
    pub fn is_enemy_of(&self, other: &Piece) -> bool {
        self.team.is_player() && other.team == self.team.opponent()
    }

    /// Character with case based on team (uppercase for White, `*` for the ghost)
    #[must_use]
    pub fn to_char(&self) -> char {
        match self.team {
            Team::White => self.kind.to_char().to_ascii_uppercase(),
            Team::Black => self.kind.to_char(),
            Team::Ghost => '*',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.team, self.kind, self.id)
    }
}
