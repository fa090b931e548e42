//! Node-state model and per-run bookkeeping

use crate::graph::NodeId;
use crate::search::path::Predecessors;
use crate::search::sink::TraversalSink;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Display state of a node during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeState {
    #[default]
    Unvisited,
    /// Discovered, waiting on the frontier
    Frontier,
    /// Dequeued and expanded
    Visited,
    /// Dequeued and matched the goal
    Goal,
}

impl NodeState {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeState::Unvisited => "unvisited",
            NodeState::Frontier => "frontier",
            NodeState::Visited => "visited",
            NodeState::Goal => "goal",
        }
    }

    /// Whether moving from `self` to `next` keeps the
    /// Unvisited -> Frontier -> {Visited | Goal} order.
    ///
    /// Frontier -> Frontier is the pop-time re-emission; anything -> Unvisited
    /// is an inter-run reset.
    pub fn can_transition_to(self, next: NodeState) -> bool {
        matches!(
            (self, next),
            (_, NodeState::Unvisited)
                | (NodeState::Unvisited, NodeState::Frontier)
                | (NodeState::Frontier, NodeState::Frontier)
                | (NodeState::Frontier, NodeState::Visited)
                | (NodeState::Frontier, NodeState::Goal)
        )
    }
}

impl fmt::Display for NodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of every node touched by one run; untouched nodes are Unvisited
#[derive(Debug, Default)]
pub struct StateMap {
    states: HashMap<NodeId, NodeState>,
}

impl StateMap {
    pub fn get(&self, node: &NodeId) -> NodeState {
        self.states.get(node).copied().unwrap_or_default()
    }

    /// Record `next` for `node`, returning the previous state
    pub fn transition(&mut self, node: &NodeId, next: NodeState) -> NodeState {
        let previous = self.states.insert(node.clone(), next).unwrap_or_default();
        if !previous.can_transition_to(next) {
            tracing::warn!(node = %node, from = %previous, to = %next, "illegal node state transition");
        }
        previous
    }
}

/// Everything one engine invocation owns: visited set, node states,
/// predecessors and the sink it reports to. Dropped when the run ends.
pub(crate) struct RunState<'s> {
    pub visited: HashSet<NodeId>,
    pub states: StateMap,
    pub predecessors: Predecessors,
    pub visit_order: Vec<NodeId>,
    pub iterations: usize,
    sink: &'s mut dyn TraversalSink,
}

impl<'s> RunState<'s> {
    pub fn new(sink: &'s mut dyn TraversalSink) -> Self {
        Self {
            visited: HashSet::new(),
            states: StateMap::default(),
            predecessors: Predecessors::default(),
            visit_order: Vec::new(),
            iterations: 0,
            sink,
        }
    }

    fn emit(&mut self, node: &NodeId, state: NodeState) {
        self.states.transition(node, state);
        self.sink.on_state_change(node, state);
    }

    /// Pop-time Frontier emission for a node that has not been visited yet
    pub fn announce(&mut self, node: &NodeId) {
        if !self.visited.contains(node) {
            tracing::trace!(node = %node, "visiting");
            self.emit(node, NodeState::Frontier);
        }
    }

    pub fn reach_goal(&mut self, node: &NodeId) {
        tracing::debug!(node = %node, "goal reached");
        self.emit(node, NodeState::Goal);
        self.sink.on_goal_reached(node);
    }

    pub fn mark_visited(&mut self, node: &NodeId) {
        tracing::trace!(node = %node, "visited");
        self.visited.insert(node.clone());
        self.visit_order.push(node.clone());
        self.emit(node, NodeState::Visited);
    }

    /// Put `neighbor` on the frontier, remembering `parent` for path reconstruction
    pub fn discover(&mut self, neighbor: &NodeId, parent: &NodeId) {
        tracing::trace!(node = %neighbor, parent = %parent, "visiting neighbor");
        self.predecessors.record(neighbor, parent);
        self.emit(neighbor, NodeState::Frontier);
    }
}
