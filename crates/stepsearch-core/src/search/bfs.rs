use crate::graph::{NeighborProvider, NodeId};
use crate::search::sink::TraversalSink;
use crate::search::state::RunState;
use crate::search::{Algorithm, SearchOutcome, SearchParams};
use std::collections::VecDeque;

/// Breadth-first search from `params.start`, reporting every state change to `sink`.
///
/// Neighbors are enqueued in declaration order, and a neighbor already visited
/// or already queued is skipped. The run ends on the goal or when the queue
/// drains.
#[tracing::instrument(skip(provider, sink, params), fields(start = %params.start, goal = ?params.goal))]
pub fn breadth_first(
    provider: &dyn NeighborProvider,
    params: SearchParams<'_>,
    sink: &mut dyn TraversalSink,
) -> SearchOutcome {
    debug_assert!(provider.contains(params.start));

    let mut state = RunState::new(sink);
    let mut queue: VecDeque<NodeId> = VecDeque::new();
    queue.push_back(params.start.clone());

    while let Some(current) = queue.pop_front() {
        if params.is_cancelled() {
            tracing::debug!(node = %current, "bfs cancelled");
            return state.finish(Algorithm::Bfs, &params, false, true);
        }
        state.iterations += 1;

        state.announce(&current);

        if params.is_goal(&current) {
            state.reach_goal(&current);
            return state.finish(Algorithm::Bfs, &params, true, false);
        }

        state.mark_visited(&current);

        for neighbor in provider.neighbors(&current) {
            if state.visited.contains(neighbor) || queue.contains(neighbor) {
                continue;
            }
            queue.push_back(neighbor.clone());
            state.discover(neighbor, &current);
        }
    }

    state.finish(Algorithm::Bfs, &params, false, false)
}
