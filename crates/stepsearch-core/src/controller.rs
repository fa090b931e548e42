//! Run controller: validates input, resets between runs, and drives the engine
//!
//! One controller serves a sequence of runs over the same graph. Before every
//! run after the first it resets each node to Unvisited through the sink, and
//! before every greedy run it restores the baseline heuristics and zeroes the
//! goal's estimate.

use std::time::Instant;

use crate::bail_invalid_node;
use crate::error::{NodeRole, Result};
use crate::graph::{Graph, GraphDefinition, NodeId};
use crate::heuristic::HeuristicTable;
use crate::search::{
    breadth_first, greedy_best_first, Algorithm, CancelToken, NodeState, SearchOutcome,
    SearchParams, TraversalSink,
};
use crate::trace_time;

#[derive(Debug)]
pub struct RunController {
    graph: Graph,
    baseline: HeuristicTable,
    heuristics: HeuristicTable,
    algorithm: Algorithm,
    has_run: bool,
    cancel: Option<CancelToken>,
}

impl RunController {
    pub fn new(graph: Graph, baseline: HeuristicTable, algorithm: Algorithm) -> Self {
        Self {
            graph,
            heuristics: baseline.clone(),
            baseline,
            algorithm,
            has_run: false,
            cancel: None,
        }
    }

    /// Build a controller from a graph definition
    pub fn from_definition(definition: &GraphDefinition, algorithm: Algorithm) -> Result<Self> {
        let (graph, baseline) = definition.build()?;
        Ok(Self::new(graph, baseline, algorithm))
    }

    /// Controller over the built-in 14-node tree
    pub fn reference(algorithm: Algorithm) -> Result<Self> {
        Self::from_definition(&GraphDefinition::reference(), algorithm)
    }

    /// Check `token` at the top of every engine iteration
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Heuristics in effect for the most recent (or upcoming) run
    pub fn heuristics(&self) -> &HeuristicTable {
        &self.heuristics
    }

    pub fn baseline(&self) -> &HeuristicTable {
        &self.baseline
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Whether the cancel token is set. `start_run` clears it, so callers that
    /// wait between runs check this first.
    pub fn cancel_requested(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }

    /// Whether a run has started since construction or the last `reset`
    pub fn has_run(&self) -> bool {
        self.has_run
    }

    /// Resolve the start token and optional goal token against the declared nodes.
    ///
    /// A blank goal token is the same as no goal.
    pub fn validate(&self, start: &str, goal: Option<&str>) -> Result<(NodeId, Option<NodeId>)> {
        let Some(start_id) = self.graph.resolve(start) else {
            bail_invalid_node!(NodeRole::Start, start.trim());
        };

        let goal_id = match goal.filter(|token| !token.trim().is_empty()) {
            None => None,
            Some(token) => match self.graph.resolve(token) {
                Some(id) => Some(id),
                None => bail_invalid_node!(NodeRole::Goal, token.trim()),
            },
        };

        Ok((start_id, goal_id))
    }

    /// Return every node to Unvisited through `sink` and forget prior runs
    pub fn reset(&mut self, sink: &mut dyn TraversalSink) {
        tracing::debug!(nodes = self.graph.nodes().len(), "reset node states");
        for node in self.graph.nodes() {
            sink.on_state_change(node, NodeState::Unvisited);
        }
        self.heuristics.reset(&self.baseline);
        self.has_run = false;
    }

    /// Validate input, clear prior-run residue, and run the configured algorithm.
    ///
    /// Invalid input fails with `InvalidNode` before any event reaches `sink`.
    #[tracing::instrument(skip(self, sink), fields(algorithm = %self.algorithm))]
    pub fn start_run(
        &mut self,
        start: &str,
        goal: Option<&str>,
        sink: &mut dyn TraversalSink,
    ) -> Result<SearchOutcome> {
        let started = Instant::now();
        let (start_id, goal_id) = self.validate(start, goal)?;

        if self.has_run {
            self.reset(sink);
        }
        self.has_run = true;

        if let Some(cancel) = &self.cancel {
            cancel.reset();
        }

        let mut params = SearchParams::new(&start_id, goal_id.as_ref());
        if let Some(cancel) = &self.cancel {
            params = params.with_cancel(cancel);
        }

        let outcome = match self.algorithm {
            Algorithm::Bfs => breadth_first(&self.graph, params, sink),
            Algorithm::Gbfs => {
                self.heuristics.reset(&self.baseline);
                if let Some(goal_id) = &goal_id {
                    self.heuristics.override_entry(goal_id.clone(), 0.0);
                    sink.on_heuristics_changed(&self.heuristics);
                }
                greedy_best_first(&self.graph, &self.heuristics, params, sink)
            }
        };

        trace_time!(started, "start_run");
        tracing::debug!(
            start = %outcome.start,
            goal_reached = outcome.goal_reached,
            visited = outcome.visited.len(),
            cancelled = outcome.cancelled,
            "run finished"
        );
        Ok(outcome)
    }
}
