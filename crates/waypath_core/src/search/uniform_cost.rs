use crate::{cancellation::CancellationToken, routing_graph::RoutingGraph};

use super::{astar::heuristic_search, heuristic::ZeroHeuristic, search_result::SearchResult};

/// Dijkstra's algorithm, run as A* without a heuristic.
pub fn uniform_cost(
    graph: &RoutingGraph,
    start: usize,
    end: usize,
    token: &CancellationToken,
) -> SearchResult {
    SearchResult::track(|tracker| {
        heuristic_search(graph, start, end, token, tracker, &ZeroHeuristic)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        meters,
        search::search_result::SearchOutcome,
        test_graph_utils::test_graph::{
            DetourNode, PentagonNode, create_detour_graph, create_disconnected_graph,
            create_pentagon_graph,
        },
    };

    #[test]
    fn pentagon() {
        let graph = create_pentagon_graph();

        let result = uniform_cost(
            &graph,
            PentagonNode::A.into(),
            PentagonNode::C.into(),
            &CancellationToken::new(),
        );

        assert_eq!(result.path(), &[0, 1, 2]);
        assert_eq!(result.distance(), Some(meters!(2)));
    }

    #[test]
    fn detour() {
        let graph = create_detour_graph();

        let result = uniform_cost(
            &graph,
            DetourNode::Start.into(),
            DetourNode::Goal.into(),
            &CancellationToken::new(),
        );

        assert_eq!(result.path(), &[0, 4, 3]);
        let expected = 8_f64.hypot(2.0) + 2_f64.hypot(2.0);
        assert!((f64::from(result.distance().unwrap()) - expected).abs() < 1e-6);
    }

    #[test]
    fn start_is_end() {
        let graph = create_pentagon_graph();

        let result = uniform_cost(&graph, 3, 3, &CancellationToken::new());

        assert_eq!(result.path(), &[3]);
        assert_eq!(result.distance(), Some(meters!(0)));
    }

    #[test]
    fn unreachable() {
        let graph = create_disconnected_graph();

        let result = uniform_cost(&graph, 4, 2, &CancellationToken::new());

        assert_eq!(result.outcome, SearchOutcome::NotFound);
        assert!(result.memory.peak_allocated > 0);
        assert_eq!(result.memory.current_allocated, 0);
    }
}
