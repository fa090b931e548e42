//! Configuration for stepsearch
//!
//! User defaults live in `<config_dir>/stepsearch/config.toml`; command-line
//! flags override them.

pub mod global;

use std::path::PathBuf;
use std::time::Duration;

use crate::search::Algorithm;
pub use global::GlobalConfig;

/// Effective settings for a command after merging config file and flags
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub algorithm: Algorithm,
    /// Pause after every state change
    pub pace: Duration,
    /// Graph definition file; `None` means the built-in tree
    pub graph: Option<PathBuf>,
}

impl RunSettings {
    pub fn resolve(
        config: &GlobalConfig,
        algorithm: Option<Algorithm>,
        pace_ms: Option<u64>,
        graph: Option<PathBuf>,
    ) -> Self {
        RunSettings {
            algorithm: algorithm.unwrap_or(config.algorithm),
            pace: Duration::from_millis(pace_ms.unwrap_or(config.pace_ms)),
            graph: graph.or_else(|| config.graph.clone()),
        }
    }
}
