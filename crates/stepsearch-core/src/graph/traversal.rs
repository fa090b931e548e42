use crate::graph::types::{Graph, NodeId};

/// Trait for providing directed adjacency to the search engine
pub trait NeighborProvider {
    fn neighbors(&self, node: &NodeId) -> &[NodeId];
    fn contains(&self, node: &NodeId) -> bool;
}

impl NeighborProvider for Graph {
    fn neighbors(&self, node: &NodeId) -> &[NodeId] {
        Graph::neighbors(self, node)
    }

    fn contains(&self, node: &NodeId) -> bool {
        Graph::contains(self, node)
    }
}
