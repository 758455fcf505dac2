use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Board;
use crate::search::movegen::{prepared_children, Step};
use crate::search::resources::{NodeTracker, SearchCounts};
use crate::search::tree::{score_subtree, SearchContext};
use crate::search::{Personality, SearchError};

/// Outcome of one top-level search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub step: Step,
    pub score: i32,
    /// Number of steps that were scored.
    pub options: usize,
    /// Number of steps sharing the best score.
    pub tied: usize,
    pub counts: SearchCounts,
}

/// Score every legal step of the side to move and pick one of the best at random.
///
/// Does not modify `board`; the caller commits the chosen step.
pub fn choose_step<R: Rng + ?Sized>(
    board: &Board,
    depth: i32,
    personality: Personality,
    max_nodes: Option<u64>,
    rng: &mut R,
) -> Result<Decision, SearchError> {
    let available = if board.in_multi_capture() {
        !board.queued_moves().aggressive.is_empty()
    } else {
        board.has_any_move()
    };
    if !available {
        return Err(SearchError::NoOptions {
            side: board.side_to_move(),
        });
    }

    let ctx = SearchContext {
        ai_side: board.side_to_move(),
        personality,
    };
    let mut tracker = NodeTracker::new(max_nodes);

    let children = prepared_children(board, &mut tracker);
    if children.is_empty() {
        return Err(SearchError::NoOptions { side: ctx.ai_side });
    }

    let options = children.len();
    let mut best_score = i32::MIN;
    let mut best: Vec<Step> = Vec::with_capacity(options);
    for (step, child) in children {
        let score = score_subtree(child, depth, &ctx, &mut tracker)?;
        debug!(from = %step.from, to = %step.to, score, "option evaluated");
        if score > best_score {
            best_score = score;
            best.clear();
            best.push(step);
        } else if score == best_score {
            best.push(step);
        }
    }

    let tied = best.len();
    let step = if tied > 1 {
        best[rng.random_range(0..tied)]
    } else {
        best[0]
    };

    let counts = tracker.counts();
    debug!(
        from = %step.from,
        to = %step.to,
        score = best_score,
        options,
        tied,
        nodes = counts.nodes,
        "option selected"
    );

    Ok(Decision {
        step,
        score: best_score,
        options,
        tied,
        counts,
    })
}
