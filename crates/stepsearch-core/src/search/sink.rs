//! Traversal event sink: the consumer of state-change notifications
//!
//! The engine calls the sink synchronously after every state change. A sink
//! may block (the terminal renderer pauses between events); the engine does
//! not care.

use crate::graph::NodeId;
use crate::heuristic::HeuristicTable;
use crate::search::state::NodeState;
use serde::Serialize;
use std::collections::HashMap;

pub trait TraversalSink {
    fn on_state_change(&mut self, node: &NodeId, state: NodeState);

    fn on_goal_reached(&mut self, node: &NodeId);

    /// Heuristic table changed for the upcoming run
    fn on_heuristics_changed(&mut self, _heuristics: &HeuristicTable) {}
}

/// One notification delivered to a sink
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraversalEvent {
    StateChange { node: NodeId, state: NodeState },
    GoalReached { node: NodeId },
    HeuristicsChanged,
}

/// Sink that keeps every event in memory
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Vec<TraversalEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[TraversalEvent] {
        &self.events
    }

    /// Only the state changes, in emission order
    pub fn state_changes(&self) -> Vec<(NodeId, NodeState)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                TraversalEvent::StateChange { node, state } => Some((node.clone(), *state)),
                _ => None,
            })
            .collect()
    }

    /// Nodes passed to `on_goal_reached`
    pub fn goals(&self) -> Vec<NodeId> {
        self.events
            .iter()
            .filter_map(|event| match event {
                TraversalEvent::GoalReached { node } => Some(node.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl TraversalSink for RecordingSink {
    fn on_state_change(&mut self, node: &NodeId, state: NodeState) {
        self.events.push(TraversalEvent::StateChange {
            node: node.clone(),
            state,
        });
    }

    fn on_goal_reached(&mut self, node: &NodeId) {
        self.events.push(TraversalEvent::GoalReached { node: node.clone() });
    }

    fn on_heuristics_changed(&mut self, _heuristics: &HeuristicTable) {
        self.events.push(TraversalEvent::HeuristicsChanged);
    }
}

/// Drop events that repeat a node's current state.
///
/// The raw stream re-emits Frontier when a node is popped; collapsing leaves
/// exactly one event per actual transition.
pub fn collapse_transitions(changes: &[(NodeId, NodeState)]) -> Vec<(NodeId, NodeState)> {
    let mut current: HashMap<&NodeId, NodeState> = HashMap::new();
    let mut collapsed = Vec::with_capacity(changes.len());

    for (node, state) in changes {
        let previous = current.insert(node, *state).unwrap_or_default();
        if previous != *state {
            collapsed.push((node.clone(), *state));
        }
    }

    collapsed
}
