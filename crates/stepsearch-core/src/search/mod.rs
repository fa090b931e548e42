//! Step-by-step search engine
//!
//! Provides the two traversal algorithms and the vocabulary they share:
//! - `bfs`: breadth-first search over a FIFO frontier
//! - `gbfs`: greedy best-first search over a heuristic-ordered open list
//! - `sink`: the event consumer both algorithms report to
//! - `state`: node states and per-run bookkeeping
//! - `path`: predecessor map and start-to-goal path reconstruction

pub mod bfs;
pub mod gbfs;
pub mod path;
pub mod sink;
pub mod state;

pub use bfs::breadth_first;
pub use gbfs::greedy_best_first;
pub use sink::{collapse_transitions, RecordingSink, TraversalEvent, TraversalSink};
pub use state::{NodeState, StateMap};

use crate::error::SearchError;
use crate::graph::NodeId;
use serde::{Deserialize, Serialize};
use state::RunState;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Traversal algorithm selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Breadth-first search
    Bfs,
    /// Greedy best-first search
    #[default]
    Gbfs,
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "gbfs" | "greedy" => Ok(Algorithm::Gbfs),
            other => Err(SearchError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Bfs => write!(f, "bfs"),
            Algorithm::Gbfs => write!(f, "gbfs"),
        }
    }
}

/// Cooperative cancellation flag checked once per loop iteration
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Clear the flag before the next run
    pub fn reset(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Inputs of one engine invocation. `start` must be a declared node.
#[derive(Debug, Clone, Copy)]
pub struct SearchParams<'a> {
    pub start: &'a NodeId,
    /// `None` means exhaustive traversal: the goal check never matches
    pub goal: Option<&'a NodeId>,
    pub cancel: Option<&'a CancelToken>,
}

impl<'a> SearchParams<'a> {
    pub fn new(start: &'a NodeId, goal: Option<&'a NodeId>) -> Self {
        Self {
            start,
            goal,
            cancel: None,
        }
    }

    pub fn with_cancel(mut self, cancel: &'a CancelToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    fn is_goal(&self, node: &NodeId) -> bool {
        self.goal == Some(node)
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.is_some_and(CancelToken::is_cancelled)
    }
}

/// Summary of a finished run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    pub algorithm: Algorithm,
    pub start: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<NodeId>,
    pub goal_reached: bool,
    /// Nodes in the order they became Visited
    pub visited: Vec<NodeId>,
    /// Start-to-goal path when the goal was reached
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<NodeId>>,
    /// Loop iterations (frontier pops)
    pub iterations: usize,
    pub cancelled: bool,
}

impl RunState<'_> {
    pub(crate) fn finish(
        self,
        algorithm: Algorithm,
        params: &SearchParams<'_>,
        goal_reached: bool,
        cancelled: bool,
    ) -> SearchOutcome {
        let path = match (goal_reached, params.goal) {
            (true, Some(goal)) => self.predecessors.reconstruct(params.start, goal),
            _ => None,
        };

        SearchOutcome {
            algorithm,
            start: params.start.clone(),
            goal: params.goal.cloned(),
            goal_reached,
            visited: self.visit_order,
            path,
            iterations: self.iterations,
            cancelled,
        }
    }
}
