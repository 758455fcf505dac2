use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A square on the board, `(0,0)` being the top-left corner.
///
/// Coordinates are signed so that neighbour arithmetic may step off the board;
/// callers check [`crate::board::Board::in_bounds`] before trusting the result.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i16,
    pub y: i16,
}

impl Coord {
    #[inline]
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Square halfway between `self` and `other`.
    ///
    /// Only meaningful for jumps, which always span exactly two diagonal steps.
    #[inline]
    pub fn midpoint(self, other: Coord) -> Coord {
        Coord::new((self.x + other.x) / 2, (self.y + other.y) / 2)
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Diagonal steps toward increasing `y` (side A's forward direction).
pub const DOWN_DIAGONALS: [Coord; 2] = [Coord { x: -1, y: 1 }, Coord { x: 1, y: 1 }];

/// Diagonal steps toward decreasing `y` (side B's forward direction).
pub const UP_DIAGONALS: [Coord; 2] = [Coord { x: -1, y: -1 }, Coord { x: 1, y: -1 }];

/// Every diagonal step, in the order moves are generated.
pub const ALL_DIAGONALS: [Coord; 4] = [
    Coord { x: -1, y: 1 },
    Coord { x: 1, y: 1 },
    Coord { x: -1, y: -1 },
    Coord { x: 1, y: -1 },
];

/// Cardinal cursor movement.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    #[inline]
    pub fn delta(self) -> Coord {
        match self {
            Direction::Up => Coord::new(0, -1),
            Direction::Down => Coord::new(0, 1),
            Direction::Left => Coord::new(-1, 0),
            Direction::Right => Coord::new(1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jump_midpoint_is_the_jumped_square() {
        for dir in ALL_DIAGONALS {
            let from = Coord::new(3, 4);
            let to = from + dir + dir;
            assert_eq!(from.midpoint(to), from + dir);
            assert_eq!(to - from, Coord::new(2 * dir.x, 2 * dir.y));
        }
    }
}
