//! Output format handling for stepsearch
//!
//! Supports three output formats:
//! - human: one readable line per event
//! - json: a single machine-readable document per run
//! - records: line-oriented, one event per line with a type prefix

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Output format for stepsearch commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
    /// Records output for line-oriented tooling
    Records,
}

impl FromStr for OutputFormat {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "records" => Ok(OutputFormat::Records),
            other => Err(SearchError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Records => write!(f, "records"),
        }
    }
}

/// Render an estimate for display: integers without a fractional part, `inf` when unknown
pub fn format_estimate(value: f64) -> String {
    if value.is_infinite() {
        "inf".to_string()
    } else {
        value.to_string()
    }
}
