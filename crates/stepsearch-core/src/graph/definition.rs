//! Serializable graph definitions
//!
//! A definition lists nodes, directed `[from, to]` edges and baseline
//! heuristics. It can come from a TOML or JSON file, or from the built-in
//! reference tree. Identifiers are normalized the same way user input is
//! (trimmed, uppercased), so `a` in a file and `A` on the command line match.

use crate::error::{Result, SearchError};
use crate::graph::types::{Graph, NodeId};
use crate::heuristic::HeuristicTable;
use crate::{bail_invalid_graph, bail_usage};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Nodes of the built-in tree, in declaration order
const REFERENCE_NODES: [&str; 14] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N",
];

/// Directed parent -> child edges of the built-in tree
const REFERENCE_EDGES: [(&str, &str); 13] = [
    ("A", "B"),
    ("A", "C"),
    ("B", "D"),
    ("B", "E"),
    ("C", "F"),
    ("C", "G"),
    ("D", "H"),
    ("D", "I"),
    ("F", "J"),
    ("F", "K"),
    ("H", "L"),
    ("I", "M"),
    ("J", "N"),
];

/// Baseline estimates of the built-in tree
const REFERENCE_HEURISTICS: [(&str, f64); 14] = [
    ("A", 0.0),
    ("B", 5.0),
    ("C", 2.0),
    ("D", 6.0),
    ("E", 4.0),
    ("F", 4.0),
    ("G", 5.0),
    ("H", 7.0),
    ("I", 5.0),
    ("J", 3.0),
    ("K", 1.0),
    ("L", 8.0),
    ("M", 4.0),
    ("N", 3.0),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDefinition {
    pub nodes: Vec<String>,
    #[serde(default)]
    pub edges: Vec<(String, String)>,
    #[serde(default)]
    pub heuristics: BTreeMap<String, f64>,
}

impl GraphDefinition {
    /// The compiled-in 14-node tree
    pub fn reference() -> Self {
        GraphDefinition {
            nodes: REFERENCE_NODES.iter().map(|n| n.to_string()).collect(),
            edges: REFERENCE_EDGES
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
            heuristics: REFERENCE_HEURISTICS
                .iter()
                .map(|(node, h)| (node.to_string(), *h))
                .collect(),
        }
    }

    /// Load a definition from a `.toml` or `.json` file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SearchError::GraphFileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let definition = match extension.as_deref() {
            Some("toml") => toml::from_str(&content)?,
            Some("json") => serde_json::from_str(&content)?,
            _ => bail_usage!(format!(
                "unsupported graph file {} (expected .toml or .json)",
                path.display()
            )),
        };

        tracing::debug!(path = %path.display(), "loaded graph definition");
        Ok(definition)
    }

    /// Validate the definition and build the graph plus its baseline heuristics
    pub fn build(&self) -> Result<(Graph, HeuristicTable)> {
        let nodes = self
            .nodes
            .iter()
            .map(|token| normalize_declared(token))
            .collect::<Result<Vec<_>>>()?;

        let edges = self
            .edges
            .iter()
            .map(|(from, to)| -> Result<(NodeId, NodeId)> {
                Ok((normalize_declared(from)?, normalize_declared(to)?))
            })
            .collect::<Result<Vec<_>>>()?;

        let graph = Graph::new(nodes, edges)?;

        let mut baseline = HeuristicTable::new();
        for (token, value) in &self.heuristics {
            let node = normalize_declared(token)?;
            if baseline.entry(&node).is_some() {
                bail_invalid_graph!("heuristic for {} is given twice", node);
            }
            if !graph.contains(&node) {
                bail_invalid_graph!("heuristic given for undeclared node {}", node);
            }
            if value.is_nan() || *value < 0.0 {
                bail_invalid_graph!("heuristic for {} must be non-negative, got {}", node, value);
            }
            baseline.override_entry(node, *value);
        }

        Ok((graph, baseline))
    }
}

fn normalize_declared(token: &str) -> Result<NodeId> {
    match NodeId::normalize(token) {
        Some(id) => Ok(id),
        None => bail_invalid_graph!("empty node identifier"),
    }
}
