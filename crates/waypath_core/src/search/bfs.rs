use crate::{
    cancellation::CancellationToken,
    constants::INVALID_NODE,
    memory::{
        allocation_tracker::AllocationTracker,
        tracked::{TrackedDeque, TrackedMap},
    },
    routing_graph::RoutingGraph,
};

use super::{
    path_builder::build_path,
    search_result::{SearchOutcome, SearchResult},
};

/// Breadth-first search: the path has the fewest edges, whatever their length.
pub fn breadth_first(
    graph: &RoutingGraph,
    start: usize,
    end: usize,
    token: &CancellationToken,
) -> SearchResult {
    SearchResult::track(|tracker| search(graph, start, end, token, tracker))
}

fn search(
    graph: &RoutingGraph,
    start: usize,
    end: usize,
    token: &CancellationToken,
    tracker: &AllocationTracker,
) -> SearchOutcome {
    let mut queue = TrackedDeque::new(tracker);
    let mut parents = TrackedMap::new(tracker);

    queue.push_back(start);
    parents.insert(start, INVALID_NODE);

    while let Some(node) = queue.pop_front() {
        if token.is_canceled() {
            return SearchOutcome::Canceled;
        }

        if node == end {
            return build_path(graph, &parents, start, end, token);
        }

        for edge in graph.adjacency(node) {
            if !parents.contains_key(&edge.to) {
                parents.insert(edge.to, node);
                queue.push_back(edge.to);
            }
        }
    }

    SearchOutcome::NotFound
}
