pub mod graph;
pub mod logging;
pub mod run;
pub mod session;
pub mod support;
