//! Heuristic table: per-node estimate of remaining distance to the goal
//!
//! Estimates only order the greedy best-first frontier. They are not checked
//! for admissibility. A node without an entry is treated as +infinity.

use crate::graph::NodeId;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeuristicTable {
    entries: HashMap<NodeId, f64>,
}

impl HeuristicTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Estimate for `node`, or +infinity if the table has no entry
    pub fn get(&self, node: &NodeId) -> f64 {
        self.entries.get(node).copied().unwrap_or(f64::INFINITY)
    }

    /// Entry for `node` without the +infinity fallback
    pub fn entry(&self, node: &NodeId) -> Option<f64> {
        self.entries.get(node).copied()
    }

    /// Replace the whole table with `baseline`
    pub fn reset(&mut self, baseline: &HeuristicTable) {
        self.entries.clone_from(&baseline.entries);
    }

    /// Set a single entry (used to zero the goal's estimate for one run)
    pub fn override_entry(&mut self, node: NodeId, value: f64) {
        self.entries.insert(node, value);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(NodeId, f64)> for HeuristicTable {
    fn from_iter<I: IntoIterator<Item = (NodeId, f64)>>(iter: I) -> Self {
        HeuristicTable {
            entries: iter.into_iter().collect(),
        }
    }
}
