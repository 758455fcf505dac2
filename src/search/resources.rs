//! Node accounting for the tree search.
//!
//! Every explored branch costs a full board copy, so the tracker counts copies and
//! evaluated nodes and can stop a search that exceeds its node budget before it
//! touches the caller's board.

use serde::{Deserialize, Serialize};

use crate::search::SearchError;

/// Running counters for one top-level search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCounts {
    /// Calls to the recursive evaluator.
    pub nodes: u64,
    /// Nodes scored without recursing (depth exhausted or no moves).
    pub leaves: u64,
    /// Board copies made while preparing candidate moves.
    pub board_copies: u64,
}

#[derive(Debug, Clone)]
pub struct NodeTracker {
    max_nodes: Option<u64>,
    counts: SearchCounts,
}

impl NodeTracker {
    #[inline]
    pub fn new(max_nodes: Option<u64>) -> Self {
        Self {
            max_nodes,
            counts: SearchCounts::default(),
        }
    }

    #[inline]
    pub fn unlimited() -> Self {
        Self::new(None)
    }

    #[inline]
    pub fn counts(&self) -> SearchCounts {
        self.counts
    }

    #[inline]
    pub fn bump_nodes(&mut self, stage: &'static str) -> Result<(), SearchError> {
        self.counts.nodes = self.counts.nodes.saturating_add(1);
        match self.max_nodes {
            Some(limit) if self.counts.nodes > limit => Err(SearchError::NodeBudgetExceeded {
                stage,
                limit,
                counts: self.counts,
            }),
            _ => Ok(()),
        }
    }

    #[inline]
    pub fn bump_leaves(&mut self) {
        self.counts.leaves = self.counts.leaves.saturating_add(1);
    }

    #[inline]
    pub fn bump_copies(&mut self, delta: usize) {
        self.counts.board_copies = self.counts.board_copies.saturating_add(delta as u64);
    }
}
