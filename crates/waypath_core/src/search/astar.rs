use crate::{
    cancellation::CancellationToken,
    constants::INVALID_NODE,
    distance::{Distance, Meters},
    memory::{allocation_tracker::AllocationTracker, tracked::TrackedMap},
    priority_queue::PriorityQueue,
    routing_graph::RoutingGraph,
};

use super::{
    heuristic::{Heuristic, StraightLineHeuristic},
    path_builder::build_path,
    search_result::{SearchOutcome, SearchResult},
};

/// A* with the straight-line heuristic. Returns a shortest path.
pub fn astar(
    graph: &RoutingGraph,
    start: usize,
    end: usize,
    token: &CancellationToken,
) -> SearchResult {
    SearchResult::track(|tracker| {
        heuristic_search(graph, start, end, token, tracker, &StraightLineHeuristic)
    })
}

/// Best-first search ordered by `g + h`, where `g` is the best known distance
/// from `start` and `h` the heuristic estimate to `end`.
///
/// A node whose distance improves after it was expanded goes back into the
/// queue, so the result stays optimal even with an inconsistent heuristic.
pub(crate) fn heuristic_search<H: Heuristic>(
    graph: &RoutingGraph,
    start: usize,
    end: usize,
    token: &CancellationToken,
    tracker: &AllocationTracker,
    heuristic: &H,
) -> SearchOutcome {
    let mut queue: PriorityQueue<usize, Distance<Meters>> = PriorityQueue::new(tracker);
    let mut distances: TrackedMap<usize, Distance<Meters>> = TrackedMap::new(tracker);
    let mut parents: TrackedMap<usize, usize> = TrackedMap::new(tracker);

    distances.insert(start, Distance::ZERO);
    parents.insert(start, INVALID_NODE);
    queue.decrease_key(start, heuristic.estimate(graph, start, end));

    while let Some((node, _)) = queue.pop() {
        if token.is_canceled() {
            return SearchOutcome::Canceled;
        }

        if node == end {
            return build_path(graph, &parents, start, end, token);
        }

        let node_distance = distances[&node];

        for edge in graph.adjacency(node) {
            let next_distance = node_distance + edge.weight;

            let improved = distances
                .get(&edge.to)
                .is_none_or(|&known| next_distance < known);

            if improved {
                distances.insert(edge.to, next_distance);
                parents.insert(edge.to, node);
                queue.decrease_key(
                    edge.to,
                    next_distance + heuristic.estimate(graph, edge.to, end),
                );
            }
        }
    }

    SearchOutcome::NotFound
}
