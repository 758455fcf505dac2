use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::coord::Coord;
use crate::search::resources::NodeTracker;

/// One atomic action: a full passive move or a single jump of a capture chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Step {
    pub from: Coord,
    pub to: Coord,
    pub capture: bool,
}

/// The steps open to the side to move at this decision point.
///
/// Mid-chain only the queued piece's further jumps count. Otherwise captures are
/// mandatory: if any piece can capture, only captures are listed, else every
/// passive move is.
pub fn legal_steps(board: &Board) -> Vec<Step> {
    if board.multi_capture {
        let Some(from) = board.queued else {
            return Vec::new();
        };
        return board
            .queued_moves
            .aggressive
            .iter()
            .map(|&to| Step {
                from,
                to,
                capture: true,
            })
            .collect();
    }

    if board.has_capture_move {
        board
            .turn_moves
            .captures()
            .map(|(from, to)| Step {
                from,
                to,
                capture: true,
            })
            .collect()
    } else {
        board
            .turn_moves
            .quiet_moves()
            .map(|(from, to)| Step {
                from,
                to,
                capture: false,
            })
            .collect()
    }
}

/// A copy of `board` with `step`'s piece queued and its destination selected, ready
/// for [`Board::execute_selection`].
pub fn prepare(board: &Board, step: Step) -> Board {
    let mut child = board.clone();
    if !child.multi_capture {
        child.queue_piece(step.from);
    }
    child.selected = step.to;
    child
}

/// One prepared copy per legal step.
pub fn prepared_children(board: &Board, tracker: &mut NodeTracker) -> Vec<(Step, Board)> {
    let children: Vec<(Step, Board)> = legal_steps(board)
        .into_iter()
        .map(|step| (step, prepare(board, step)))
        .collect();
    tracker.bump_copies(children.len());
    children
}
