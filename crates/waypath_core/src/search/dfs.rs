use crate::{
    cancellation::CancellationToken,
    distance::{Distance, Meters},
    memory::{
        allocation_tracker::AllocationTracker,
        tracked::{TrackedSet, TrackedVec},
    },
    routing_graph::RoutingGraph,
};

use super::search_result::{SearchOutcome, SearchResult};

/// A stack frame: the node and the offset of the next adjacency entry to try.
type Frame = (usize, usize);

/// Iterative depth-first search. The returned path is the branch that was on
/// the stack when the end node was reached, which is not necessarily the
/// shortest one.
pub fn depth_first(
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
    let mut stack: TrackedVec<Frame> = TrackedVec::new(tracker);
    let mut visited: TrackedSet<usize> = TrackedSet::new(tracker);

    stack.push((start, 0));
    visited.insert(start);

    loop {
        if token.is_canceled() {
            return SearchOutcome::Canceled;
        }

        let Some(&(node, offset)) = stack.last() else {
            return SearchOutcome::NotFound;
        };

        if node == end {
            return path_from_stack(graph, &stack, token);
        }

        let adjacency = graph.adjacency(node);
        let next = adjacency[offset..]
            .iter()
            .position(|edge| !visited.contains(&edge.to))
            .map(|skipped| offset + skipped);

        match next {
            None => {
                stack.pop();
            }
            Some(index) => {
                let next_node = adjacency[index].to;
                if let Some(frame) = stack.last_mut() {
                    frame.1 = index + 1;
                }
                visited.insert(next_node);
                stack.push((next_node, 0));
            }
        }
    }
}

fn path_from_stack(
    graph: &RoutingGraph,
    stack: &[Frame],
    token: &CancellationToken,
) -> SearchOutcome {
    let mut path = Vec::with_capacity(stack.len());
    let mut distance: Distance<Meters> = Distance::ZERO;

    for &(node, _) in stack {
        if token.is_canceled() {
            return SearchOutcome::Canceled;
        }

        if let Some(&previous) = path.last() {
            distance = distance + graph.distance(previous, node);
        }
        path.push(node);
    }

    SearchOutcome::Found { path, distance }
}
