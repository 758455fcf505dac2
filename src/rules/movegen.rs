use arrayvec::ArrayVec;

use crate::board::Board;
use crate::coord::{Coord, ALL_DIAGONALS, DOWN_DIAGONALS, UP_DIAGONALS};
use crate::pieces::{Piece, Side};

/// Destinations reachable by one piece in a single step.
///
/// A piece has at most four diagonal neighbours, so both lists are fixed-capacity.
/// A destination is never both passive and aggressive: the neighbour is either empty
/// (passive) or occupied (and the landing square one further is the capture).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveSet {
    pub origin: Coord,
    pub passive: ArrayVec<Coord, 4>,
    pub aggressive: ArrayVec<Coord, 4>,
}

impl MoveSet {
    pub fn new(origin: Coord) -> Self {
        Self {
            origin,
            passive: ArrayVec::new(),
            aggressive: ArrayVec::new(),
        }
    }

    /// Drop both destination lists; `origin` is kept.
    pub fn clear(&mut self) {
        self.passive.clear();
        self.aggressive.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.passive.is_empty() && self.aggressive.is_empty()
    }

    pub fn len(&self) -> usize {
        self.passive.len() + self.aggressive.len()
    }
}

/// Moves of every piece belonging to the side to move.
///
/// Rebuilt from scratch at the start of each turn and stale at any other time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveIndex {
    sets: Vec<MoveSet>,
}

impl MoveIndex {
    pub fn with_capacity(pieces: usize) -> Self {
        Self {
            sets: Vec::with_capacity(pieces),
        }
    }

    pub fn sets(&self) -> &[MoveSet] {
        &self.sets
    }

    pub fn passive_count(&self) -> usize {
        self.sets.iter().map(|m| m.passive.len()).sum()
    }

    pub fn aggressive_count(&self) -> usize {
        self.sets.iter().map(|m| m.aggressive.len()).sum()
    }

    /// Every `(origin, destination)` capture, in board order.
    pub fn captures(&self) -> impl Iterator<Item = (Coord, Coord)> + '_ {
        self.sets
            .iter()
            .flat_map(|m| m.aggressive.iter().map(move |&to| (m.origin, to)))
    }

    /// Every `(origin, destination)` non-capturing move, in board order.
    pub fn quiet_moves(&self) -> impl Iterator<Item = (Coord, Coord)> + '_ {
        self.sets
            .iter()
            .flat_map(|m| m.passive.iter().map(move |&to| (m.origin, to)))
    }

    pub fn for_origin(&self, origin: Coord) -> Option<&MoveSet> {
        self.sets.iter().find(|m| m.origin == origin)
    }
}

#[inline]
fn step_directions(piece: Piece) -> &'static [Coord] {
    match piece {
        Piece::Empty => &[],
        Piece::Man(Side::A) => &DOWN_DIAGONALS,
        Piece::Man(Side::B) => &UP_DIAGONALS,
        Piece::King(_) => &ALL_DIAGONALS,
    }
}

impl Board {
    /// Fill `moves` with the destinations of `piece` standing on `moves.origin`.
    ///
    /// The piece need not actually be on the board at `origin`; only the neighbours are
    /// read. Passive destinations are recorded only when `include_passive` is set.
    pub fn generate_moves(&self, piece: Piece, include_passive: bool, moves: &mut MoveSet) {
        moves.clear();
        let Some(side) = piece.side() else {
            return;
        };

        let origin = moves.origin;
        for &dir in step_directions(piece) {
            let neighbour = origin + dir;
            if !self.in_bounds(neighbour) {
                continue;
            }
            match self.piece_at(neighbour).side() {
                None => {
                    if include_passive {
                        moves.passive.push(neighbour);
                    }
                }
                Some(s) if s != side => {
                    // The landing square must be on the board: off-board reads look empty.
                    let landing = neighbour + dir;
                    if self.in_bounds(landing) && self.is_empty(landing) {
                        moves.aggressive.push(landing);
                    }
                }
                Some(_) => {}
            }
        }
    }

    /// Rebuild the per-turn move index for the side to move along with the cached
    /// "any move" and "any capture" flags.
    pub(crate) fn recompute_turn_moves(&mut self) {
        let side = self.side_to_move;
        let mut index = std::mem::take(&mut self.turn_moves);
        index.sets.clear();

        for (origin, piece) in self.pieces() {
            if !piece.belongs_to(side) {
                continue;
            }
            let mut set = MoveSet::new(origin);
            self.generate_moves(piece, true, &mut set);
            index.sets.push(set);
        }

        let quiet = index.passive_count();
        let captures = index.aggressive_count();
        self.has_any_move = quiet + captures > 0;
        self.has_capture_move = captures > 0;
        self.turn_moves = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoardConfig;

    #[test]
    fn edge_jump_needs_an_on_board_landing() {
        // Side A man on the right edge with an enemy diagonally ahead: the landing square
        // would be off the board, so there is no capture and no passive move that way.
        let board = Board::from_pieces(
            BoardConfig::default(),
            Side::A,
            &[
                (Coord::new(6, 3), Piece::Man(Side::A)),
                (Coord::new(7, 4), Piece::Man(Side::B)),
            ],
        )
        .unwrap();

        let mut moves = MoveSet::new(Coord::new(6, 3));
        board.generate_moves(Piece::Man(Side::A), true, &mut moves);
        assert!(moves.aggressive.is_empty());
        assert_eq!(moves.passive.as_slice(), &[Coord::new(5, 4)]);
    }

    #[test]
    fn empty_piece_has_no_moves() {
        let board = Board::standard();
        let mut moves = MoveSet::new(Coord::new(3, 3));
        board.generate_moves(Piece::EMPTY, true, &mut moves);
        assert!(moves.is_empty());
    }
}
