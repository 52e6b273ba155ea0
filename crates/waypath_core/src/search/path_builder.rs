use crate::{
    cancellation::CancellationToken,
    distance::{Distance, Meters},
    memory::tracked::TrackedMap,
    routing_graph::RoutingGraph,
};

use super::search_result::SearchOutcome;

/// Walks the parent links back from `end` to `start`, summing the real edge
/// lengths. A cancellation observed on the way discards the partial path.
pub(crate) fn build_path(
    graph: &RoutingGraph,
    parents: &TrackedMap<usize, usize>,
    start: usize,
    end: usize,
    token: &CancellationToken,
) -> SearchOutcome {
    let mut path = vec![end];
    let mut distance: Distance<Meters> = Distance::ZERO;
    let mut node = end;

    while node != start {
        if token.is_canceled() {
            return SearchOutcome::Canceled;
        }

        let parent = parents[&node];
        distance = distance + graph.distance(parent, node);
        path.push(parent);
        node = parent;
    }

    path.reverse();
    SearchOutcome::Found { path, distance }
}
