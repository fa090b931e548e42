//! CLI argument parsing for stepsearch
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --graph

pub mod parse;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use parse::{parse_algorithm, parse_format};
pub use stepsearch_core::format::OutputFormat;
use stepsearch_core::search::Algorithm;

/// Stepsearch - step-by-step BFS and greedy best-first search over a small tree
#[derive(Parser, Debug)]
#[command(name = "stepsearch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, stepsearch_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Graph definition file (.toml or .json) to use instead of the built-in tree
    #[arg(long, global = true, env = "STEPSEARCH_GRAPH")]
    pub graph: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Flags shared by the commands that run searches
#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Search algorithm: bfs or gbfs
    #[arg(long, short, value_parser = parse_algorithm)]
    pub algorithm: Option<Algorithm>,

    /// Milliseconds to pause after each state change
    #[arg(long)]
    pub pace_ms: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one search and stream its state changes
    Run {
        /// Start node
        start: String,

        /// Goal node (omit to traverse everything reachable)
        goal: Option<String>,

        #[command(flatten)]
        search: SearchArgs,
    },

    /// Read `START [GOAL]` lines from stdin and run each in turn
    Session {
        #[command(flatten)]
        search: SearchArgs,
    },

    /// Show nodes, directed edges and baseline heuristics
    Graph,
}
