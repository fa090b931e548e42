//! Path reconstruction from the predecessor map

use crate::graph::NodeId;
use std::collections::HashMap;

/// First-discovery parent of every node put on the frontier
#[derive(Debug, Default)]
pub struct Predecessors {
    parents: HashMap<NodeId, NodeId>,
}

impl Predecessors {
    /// Record `parent` for `node`. The first discovery wins.
    pub fn record(&mut self, node: &NodeId, parent: &NodeId) {
        self.parents
            .entry(node.clone())
            .or_insert_with(|| parent.clone());
    }

    pub fn parent(&self, node: &NodeId) -> Option<&NodeId> {
        self.parents.get(node)
    }

    /// Walk parents back from `to` until `from`. `None` if the chain breaks.
    pub fn reconstruct(&self, from: &NodeId, to: &NodeId) -> Option<Vec<NodeId>> {
        let mut path = vec![to.clone()];
        let mut current = to;

        while current != from {
            // Chain longer than the map means a cycle
            if path.len() > self.parents.len() + 1 {
                return None;
            }
            current = self.parents.get(current)?;
            path.push(current.clone());
        }

        path.reverse();
        Some(path)
    }
}
