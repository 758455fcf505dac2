//! Depth-limited game-tree search.
//!
//! The search never mutates the board it is asked about. Each candidate step is
//! played on its own copy, recursively, and the scores are folded according to the
//! configured [`Personality`].

use thiserror::Error;

use crate::pieces::Side;
use crate::rules::SelectionError;

pub mod ai;
pub mod movegen;
pub mod personality;
pub mod resources;
pub mod tree;

pub use ai::{choose_step, Decision};
pub use movegen::{legal_steps, Step};
pub use personality::Personality;
pub use resources::{NodeTracker, SearchCounts};
pub use tree::{score_subtree, terminal_score, SearchContext};

#[derive(Debug, Error)]
pub enum SearchError {
    /// The side to move has nothing to play; the game is over.
    #[error("no legal options for side {side}")]
    NoOptions { side: Side },
    #[error("node budget exceeded at {stage} (limit={limit}, nodes={}, leaves={}, copies={})", .counts.nodes, .counts.leaves, .counts.board_copies)]
    NodeBudgetExceeded {
        stage: &'static str,
        limit: u64,
        counts: SearchCounts,
    },
    /// A prepared or proposed step was refused by the board.
    #[error("step rejected: {0}")]
    Selection(#[from] SelectionError),
}
