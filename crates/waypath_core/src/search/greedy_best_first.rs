use crate::{
    cancellation::CancellationToken,
    constants::INVALID_NODE,
    memory::{allocation_tracker::AllocationTracker, tracked::TrackedMap},
    priority_queue::PriorityQueue,
    routing_graph::RoutingGraph,
};

use super::{
    heuristic::{Heuristic, StraightLineHeuristic},
    path_builder::build_path,
    search_result::{SearchOutcome, SearchResult},
};

/// Greedy best-first search: always expands the node that looks closest to
/// the end, ignoring the distance already travelled. Fast, not optimal.
pub fn greedy_best_first(
    graph: &RoutingGraph,
    start: usize,
    end: usize,
    token: &CancellationToken,
) -> SearchResult {
    SearchResult::track(|tracker| {
        search(graph, start, end, token, tracker, &StraightLineHeuristic)
    })
}

fn search(
    graph: &RoutingGraph,
    start: usize,
    end: usize,
    token: &CancellationToken,
    tracker: &AllocationTracker,
    heuristic: &impl Heuristic,
) -> SearchOutcome {
    let mut queue = PriorityQueue::new(tracker);
    let mut parents = TrackedMap::new(tracker);

    queue.decrease_key(start, heuristic.estimate(graph, start, end));
    parents.insert(start, INVALID_NODE);

    while let Some((node, _)) = queue.pop() {
        if token.is_canceled() {
            return SearchOutcome::Canceled;
        }

        if node == end {
            return build_path(graph, &parents, start, end, token);
        }

        for edge in graph.adjacency(node) {
            // Parents are only recorded on first discovery
            if !parents.contains_key(&edge.to) {
                parents.insert(edge.to, node);
                queue.decrease_key(edge.to, heuristic.estimate(graph, edge.to, end));
            }
        }
    }

    SearchOutcome::NotFound
}
