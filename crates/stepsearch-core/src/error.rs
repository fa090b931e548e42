//! Error types and exit codes for stepsearch
//!
//! Exit codes:
//! - 0: Success (including runs that exhaust the frontier without a goal)
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unknown start or goal node)
//! - 3: Data error (graph definition violates its invariants)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the stepsearch binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args/node tokens (2)
    Usage = 2,
    /// Data error - invalid graph definition (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while configuring or starting a search run
#[derive(Error, Debug)]
pub enum SearchError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("unknown algorithm: {0} (expected: bfs or gbfs)")]
    UnknownAlgorithm(String),

    #[error("invalid {role} node: '{token}' is not a declared node")]
    InvalidNode { role: NodeRole, token: String },

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("invalid graph definition: {reason}")]
    InvalidGraph { reason: String },

    #[error("graph file not found: {path:?}")]
    GraphFileNotFound { path: PathBuf },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

/// Which user-supplied token failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    Start,
    Goal,
}

impl std::fmt::Display for NodeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeRole::Start => write!(f, "start"),
            NodeRole::Goal => write!(f, "goal"),
        }
    }
}

impl SearchError {
    /// Create an error for a token that names no declared node
    pub fn invalid_node(role: NodeRole, token: impl std::fmt::Display) -> Self {
        SearchError::InvalidNode {
            role,
            token: token.to_string(),
        }
    }

    /// Create an error for a graph definition that breaks an invariant
    pub fn invalid_graph(reason: impl std::fmt::Display) -> Self {
        SearchError::InvalidGraph {
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SearchError::UnknownFormat(_)
            | SearchError::UnknownAlgorithm(_)
            | SearchError::InvalidNode { .. }
            | SearchError::UsageError(_) => ExitCode::Usage,

            SearchError::InvalidGraph { .. } | SearchError::GraphFileNotFound { .. } => {
                ExitCode::Data
            }

            SearchError::Io(_)
            | SearchError::Json(_)
            | SearchError::Toml(_)
            | SearchError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            SearchError::UnknownFormat(_) => "unknown_format",
            SearchError::UnknownAlgorithm(_) => "unknown_algorithm",
            SearchError::InvalidNode { .. } => "invalid_node",
            SearchError::UsageError(_) => "usage_error",
            SearchError::InvalidGraph { .. } => "invalid_graph",
            SearchError::GraphFileNotFound { .. } => "graph_file_not_found",
            SearchError::Io(_) => "io_error",
            SearchError::Json(_) => "json_error",
            SearchError::Toml(_) => "toml_error",
            SearchError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for stepsearch operations
pub type Result<T> = std::result::Result<T, SearchError>;
