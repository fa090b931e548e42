//! Stepsearch Core Library
//!
//! Graph model, heuristic table, step-by-step BFS and greedy best-first
//! search, and the run controller that drives them.

pub mod config;
pub mod controller;
pub mod error;
pub mod format;
pub mod graph;
pub mod heuristic;
pub mod logging;
pub mod search;
