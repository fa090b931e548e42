use crate::bail_invalid_graph;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Opaque, comparable identifier of a graph node
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        NodeId(id.into())
    }

    /// Normalize a user-supplied token: trim surrounding whitespace and uppercase.
    /// Returns `None` for an empty token.
    pub fn normalize(token: &str) -> Option<Self> {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(NodeId(trimmed.to_uppercase()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        NodeId::new(id)
    }
}

/// A directed edge, parent to child
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
}

/// Fixed set of nodes plus a directed adjacency relation.
///
/// Every edge endpoint is a declared node; `Graph::new` refuses anything else.
/// Neighbor order is the order edges were declared in.
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Vec<NodeId>,
    edges: Vec<Edge>,
    adjacency: HashMap<NodeId, Vec<NodeId>>,
}

impl Graph {
    pub fn new(nodes: Vec<NodeId>, edges: Vec<(NodeId, NodeId)>) -> Result<Self> {
        let mut declared: HashSet<&NodeId> = HashSet::with_capacity(nodes.len());
        for node in &nodes {
            if !declared.insert(node) {
                bail_invalid_graph!("node {} is declared twice", node);
            }
        }

        let mut adjacency: HashMap<NodeId, Vec<NodeId>> = HashMap::with_capacity(nodes.len());
        let mut seen_edges: HashSet<(&NodeId, &NodeId)> = HashSet::with_capacity(edges.len());
        for (from, to) in &edges {
            for endpoint in [from, to] {
                if !declared.contains(endpoint) {
                    bail_invalid_graph!("edge {} -> {} names undeclared node {}", from, to, endpoint);
                }
            }
            if !seen_edges.insert((from, to)) {
                bail_invalid_graph!("edge {} -> {} is declared twice", from, to);
            }
            adjacency.entry(from.clone()).or_default().push(to.clone());
        }

        let edges = edges
            .into_iter()
            .map(|(from, to)| Edge { from, to })
            .collect();

        Ok(Graph {
            nodes,
            edges,
            adjacency,
        })
    }

    /// All declared nodes, in declaration order
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// All directed edges, in declaration order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn contains(&self, node: &NodeId) -> bool {
        self.nodes.contains(node)
    }

    /// Children of `node` in declaration order; empty for leaves
    pub fn neighbors(&self, node: &NodeId) -> &[NodeId] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Normalize `token` and return the matching declared node, if any
    pub fn resolve(&self, token: &str) -> Option<NodeId> {
        NodeId::normalize(token).filter(|id| self.contains(id))
    }
}
