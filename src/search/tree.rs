use tracing::trace;

use crate::board::Board;
use crate::pieces::Side;
use crate::search::movegen::prepared_children;
use crate::search::resources::NodeTracker;
use crate::search::{Personality, SearchError};

/// Score for a position where the side to move has no moves left.
pub const WIN_SCORE: i32 = 100;

/// Fixed for the whole of one top-level search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchContext {
    /// Side that started the search; every score is from its point of view.
    pub ai_side: Side,
    pub personality: Personality,
}

/// Static score of a position from `ai_side`'s point of view.
///
/// A side without moves has lost: `-WIN_SCORE` if that is the AI, `WIN_SCORE` otherwise.
/// Any other position counts material over the whole grid.
pub fn terminal_score(board: &Board, ai_side: Side) -> i32 {
    if !board.has_any_move() {
        if board.side_to_move() == ai_side {
            -WIN_SCORE
        } else {
            WIN_SCORE
        }
    } else {
        board.material(ai_side)
    }
}

/// Play the prepared step on `board` and score the resulting subtree.
///
/// `board` must come from [`crate::search::movegen::prepare`]. `depth` counts the plies
/// still to explore below this step; the node is terminal once it drops below zero
/// or the side to move is out of moves.
pub fn score_subtree(
    mut board: Board,
    depth: i32,
    ctx: &SearchContext,
    tracker: &mut NodeTracker,
) -> Result<i32, SearchError> {
    tracker.bump_nodes("score_subtree")?;
    board.execute_selection()?;

    let depth = depth - 1;
    if depth < 0 || !board.has_any_move() {
        tracker.bump_leaves();
        return Ok(ctx
            .personality
            .adjust_leaf(terminal_score(&board, ctx.ai_side)));
    }

    let children = prepared_children(&board, tracker);
    let mut scores = Vec::with_capacity(children.len());
    for (step, child) in children {
        let score = score_subtree(child, depth, ctx, tracker)?;
        trace!(from = %step.from, to = %step.to, depth, score, "subtree scored");
        scores.push(score);
    }

    Ok(ctx.personality.aggregate(scores))
}
