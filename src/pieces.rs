use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two players.
///
/// Side `A` (drawn as `x`) starts on the rows nearest `y = 0` and advances toward
/// the last row; side `B` (drawn as `o`) starts at the far end and advances toward row 0.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => f.write_str("X"),
            Side::B => f.write_str("O"),
        }
    }
}

/// Occupancy of a single square.
///
/// A closed value type: every square holds exactly one of these and a mutation
/// replaces it wholesale. Since `Empty` carries no side, all empty squares compare equal.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Piece {
    #[default]
    Empty,
    Man(Side),
    King(Side),
}

impl Piece {
    pub const EMPTY: Piece = Piece::Empty;

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Piece::Empty
    }

    #[inline]
    pub fn is_man(self) -> bool {
        matches!(self, Piece::Man(_))
    }

    #[inline]
    pub fn is_king(self) -> bool {
        matches!(self, Piece::King(_))
    }

    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            Piece::Empty => None,
            Piece::Man(s) | Piece::King(s) => Some(s),
        }
    }

    #[inline]
    pub fn belongs_to(self, side: Side) -> bool {
        self.side() == Some(side)
    }

    /// The king this piece becomes when crowned. Kings and empties are unchanged.
    #[inline]
    pub fn crowned(self) -> Piece {
        match self {
            Piece::Man(s) => Piece::King(s),
            other => other,
        }
    }

    /// Single-character glyph: `x`/`o` for men, `X`/`O` for kings, space for empty.
    pub fn glyph(self) -> char {
        match self {
            Piece::Empty => ' ',
            Piece::Man(Side::A) => 'x',
            Piece::Man(Side::B) => 'o',
            Piece::King(Side::A) => 'X',
            Piece::King(Side::B) => 'O',
        }
    }
}
