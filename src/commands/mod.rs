//! Command implementations for stepsearch

pub mod dispatch;
pub mod graph;
pub mod report;
pub mod run;
pub mod session;
pub mod sink;
