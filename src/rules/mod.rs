//! Move legality and the turn state machine.
//!
//! [`movegen`] computes destinations for single pieces and the per-turn index;
//! [`turn`] drives a selection through queueing, moving, capturing and crowning.

use thiserror::Error;

pub mod movegen;
pub mod turn;

pub use movegen::{MoveIndex, MoveSet};

/// Why [`crate::board::Board::execute_selection`] refused an action.
///
/// A rejected action leaves the board as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Nothing is queued and the selected square is empty or holds an opponent's piece.
    #[error("select a piece belonging to the side to move")]
    InvalidSelection,
    /// The selected square is not a destination of the queued piece.
    #[error("the attempted move is not permitted")]
    IllegalDestination,
    /// A non-capturing move was attempted while a capture is available.
    #[error("the attempted move is not permitted: a capture is available and must be taken")]
    ForcedCapture,
}
