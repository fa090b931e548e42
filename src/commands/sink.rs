//! Terminal rendering of traversal events
//!
//! Human and records output is written (and flushed) as each event arrives, so
//! a paced run can be watched live. JSON output is buffered and written as one
//! document when the run finishes.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use stepsearch_core::format::{format_estimate, OutputFormat};
use stepsearch_core::graph::NodeId;
use stepsearch_core::heuristic::HeuristicTable;
use stepsearch_core::search::{NodeState, SearchOutcome, TraversalEvent, TraversalSink};

pub struct TerminalSink<W: Write> {
    out: W,
    format: OutputFormat,
    pace: Duration,
    nodes: Vec<NodeId>,
    events: Vec<TraversalEvent>,
    resetting: bool,
    error: Option<io::Error>,
}

impl<W: Write> TerminalSink<W> {
    /// `nodes` fixes the order heuristics are displayed in
    pub fn new(out: W, format: OutputFormat, pace: Duration, nodes: &[NodeId]) -> Self {
        Self {
            out,
            format,
            pace,
            nodes: nodes.to_vec(),
            events: Vec::new(),
            resetting: false,
            error: None,
        }
    }

    fn write_line(&mut self, line: std::fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "{}", line).and_then(|_| self.out.flush()) {
            self.error = Some(e);
        }
    }

    fn heuristics_line(&self, heuristics: &HeuristicTable) -> String {
        self.nodes
            .iter()
            .map(|node| format!("{}={}", node, format_estimate(heuristics.get(node))))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Write the run summary and surface any write error hit while streaming.
    ///
    /// JSON is pretty-printed when `pretty`, otherwise one line per run.
    pub fn finish(mut self, outcome: &SearchOutcome, quiet: bool, pretty: bool) -> io::Result<()> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }

        match self.format {
            OutputFormat::Human => {
                if !quiet {
                    write_human_summary(&mut self.out, outcome)?;
                }
            }
            OutputFormat::Records => write_records_summary(&mut self.out, outcome)?,
            OutputFormat::Json => {
                let document = serde_json::json!({
                    "outcome": outcome,
                    "events": self.events,
                });
                let rendered = if pretty {
                    serde_json::to_string_pretty(&document)
                } else {
                    serde_json::to_string(&document)
                }
                .map_err(io::Error::other)?;
                writeln!(self.out, "{}", rendered)?;
            }
        }

        self.out.flush()
    }
}

impl<W: Write> TraversalSink for TerminalSink<W> {
    fn on_state_change(&mut self, node: &NodeId, state: NodeState) {
        match self.format {
            OutputFormat::Json => self.events.push(TraversalEvent::StateChange {
                node: node.clone(),
                state,
            }),
            OutputFormat::Records => self.write_line(format_args!("E {} {}", state, node)),
            OutputFormat::Human => {
                if state == NodeState::Unvisited {
                    if !self.resetting {
                        self.write_line(format_args!("reset"));
                    }
                } else {
                    self.write_line(format_args!("{:<8} {}", state.as_str(), node));
                }
            }
        }

        self.resetting = state == NodeState::Unvisited;
        if !self.resetting && !self.pace.is_zero() {
            thread::sleep(self.pace);
        }
    }

    fn on_goal_reached(&mut self, node: &NodeId) {
        match self.format {
            OutputFormat::Json => self
                .events
                .push(TraversalEvent::GoalReached { node: node.clone() }),
            OutputFormat::Records => self.write_line(format_args!("G {}", node)),
            OutputFormat::Human => {
                self.write_line(format_args!("Goal node '{}' reached!", node))
            }
        }
    }

    fn on_heuristics_changed(&mut self, heuristics: &HeuristicTable) {
        match self.format {
            OutputFormat::Json => self.events.push(TraversalEvent::HeuristicsChanged),
            OutputFormat::Records => {
                let line = self.heuristics_line(heuristics);
                self.write_line(format_args!("H {}", line));
            }
            OutputFormat::Human => {
                let line = self.heuristics_line(heuristics);
                self.write_line(format_args!("heuristics: {}", line));
            }
        }
    }
}

fn join_nodes(nodes: &[NodeId], separator: &str) -> String {
    nodes
        .iter()
        .map(NodeId::as_str)
        .collect::<Vec<_>>()
        .join(separator)
}

fn write_human_summary<W: Write>(out: &mut W, outcome: &SearchOutcome) -> io::Result<()> {
    writeln!(out, "visited: {}", join_nodes(&outcome.visited, " "))?;
    if let Some(path) = &outcome.path {
        writeln!(out, "path: {}", join_nodes(path, " -> "))?;
    }
    if outcome.cancelled {
        writeln!(out, "run cancelled")?;
    } else if let (Some(goal), false) = (&outcome.goal, outcome.goal_reached) {
        writeln!(out, "goal {} not reached", goal)?;
    }
    Ok(())
}

fn write_records_summary<W: Write>(out: &mut W, outcome: &SearchOutcome) -> io::Result<()> {
    writeln!(
        out,
        "S algorithm={} start={} goal={} reached={} visited={} iterations={} cancelled={}",
        outcome.algorithm,
        outcome.start,
        outcome.goal.as_ref().map_or("-", NodeId::as_str),
        outcome.goal_reached,
        outcome.visited.len(),
        outcome.iterations,
        outcome.cancelled,
    )?;
    if let Some(path) = &outcome.path {
        writeln!(out, "P {}", join_nodes(path, " "))?;
    }
    Ok(())
}
