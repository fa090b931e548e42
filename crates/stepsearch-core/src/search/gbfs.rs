use crate::graph::{NeighborProvider, NodeId};
use crate::heuristic::HeuristicTable;
use crate::search::sink::TraversalSink;
use crate::search::state::RunState;
use crate::search::{Algorithm, SearchOutcome, SearchParams};

/// Stable sort of the open list by estimate, lowest first.
///
/// Equal estimates keep their current relative order, so among ties the node
/// that entered the open list first is popped first.
fn order_open_list(open: &mut [NodeId], heuristics: &HeuristicTable) {
    open.sort_by(|a, b| heuristics.get(a).total_cmp(&heuristics.get(b)));
}

/// Greedy best-first search from `params.start`, reporting every state change to `sink`.
///
/// The whole open list is re-sorted before every pop; the graph is small
/// enough that a heap buys nothing here.
#[tracing::instrument(skip(provider, heuristics, sink, params), fields(start = %params.start, goal = ?params.goal))]
pub fn greedy_best_first(
    provider: &dyn NeighborProvider,
    heuristics: &HeuristicTable,
    params: SearchParams<'_>,
    sink: &mut dyn TraversalSink,
) -> SearchOutcome {
    debug_assert!(provider.contains(params.start));

    let mut state = RunState::new(sink);
    let mut open: Vec<NodeId> = vec![params.start.clone()];

    while !open.is_empty() {
        if params.is_cancelled() {
            tracing::debug!(open = open.len(), "gbfs cancelled");
            return state.finish(Algorithm::Gbfs, &params, false, true);
        }
        state.iterations += 1;

        order_open_list(&mut open, heuristics);
        let current = open.remove(0);
        tracing::trace!(node = %current, estimate = heuristics.get(&current), "pop");

        state.announce(&current);

        if params.is_goal(&current) {
            state.reach_goal(&current);
            return state.finish(Algorithm::Gbfs, &params, true, false);
        }

        state.mark_visited(&current);

        for neighbor in provider.neighbors(&current) {
            if state.visited.contains(neighbor) || open.contains(neighbor) {
                continue;
            }
            open.push(neighbor.clone());
            state.discover(neighbor, &current);
        }
    }

    state.finish(Algorithm::Gbfs, &params, false, false)
}
