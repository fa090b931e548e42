//! Graph model for the search engine
//!
//! - `types`: node identifiers and the validated directed graph
//! - `definition`: serializable graph definitions (files and the built-in tree)
//! - `traversal`: neighbor provider trait consumed by the search algorithms

pub mod definition;
pub mod traversal;
pub mod types;

pub use definition::GraphDefinition;
pub use traversal::NeighborProvider;
pub use types::{Edge, Graph, NodeId};
