use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{cancellation::CancellationToken, routing_graph::RoutingGraph};

use super::{
    astar::astar, bfs::breadth_first, dfs::depth_first, greedy_best_first::greedy_best_first,
    search_result::SearchResult, uniform_cost::uniform_cost,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchAlgorithm {
    DepthFirst,
    BreadthFirst,
    GreedyBestFirst,
    UniformCost,
    AStar,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown search algorithm `{0}`, expected one of dfs, bfs, greedy, ucs, astar")]
pub struct ParseSearchAlgorithmError(String);

impl SearchAlgorithm {
    pub const ALL: [SearchAlgorithm; 5] = [
        SearchAlgorithm::DepthFirst,
        SearchAlgorithm::BreadthFirst,
        SearchAlgorithm::GreedyBestFirst,
        SearchAlgorithm::UniformCost,
        SearchAlgorithm::AStar,
    ];

    /// Runs the algorithm from `start` to `end`.
    ///
    /// # Panics
    ///
    /// Panics if `start` or `end` is not a node index of `graph`.
    pub fn search(
        self,
        graph: &RoutingGraph,
        start: usize,
        end: usize,
        token: &CancellationToken,
    ) -> SearchResult {
        assert!(
            start < graph.node_count() && end < graph.node_count(),
            "Search endpoints ({start}, {end}) out of range for a graph of {} nodes",
            graph.node_count()
        );

        match self {
            SearchAlgorithm::DepthFirst => depth_first(graph, start, end, token),
            SearchAlgorithm::BreadthFirst => breadth_first(graph, start, end, token),
            SearchAlgorithm::GreedyBestFirst => greedy_best_first(graph, start, end, token),
            SearchAlgorithm::UniformCost => uniform_cost(graph, start, end, token),
            SearchAlgorithm::AStar => astar(graph, start, end, token),
        }
    }

    /// Position in [`SearchAlgorithm::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn short_name(self) -> &'static str {
        match self {
            SearchAlgorithm::DepthFirst => "DFS",
            SearchAlgorithm::BreadthFirst => "BFS",
            SearchAlgorithm::GreedyBestFirst => "GBeFS",
            SearchAlgorithm::UniformCost => "UCS",
            SearchAlgorithm::AStar => "A*",
        }
    }

    pub fn long_name(self) -> &'static str {
        match self {
            SearchAlgorithm::DepthFirst => "Depth-first search",
            SearchAlgorithm::BreadthFirst => "Breadth-first search",
            SearchAlgorithm::GreedyBestFirst => "Greedy best-first search",
            SearchAlgorithm::UniformCost => "Uniform-cost search",
            SearchAlgorithm::AStar => "A* search",
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

impl FromStr for SearchAlgorithm {
    type Err = ParseSearchAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" => Ok(SearchAlgorithm::DepthFirst),
            "bfs" => Ok(SearchAlgorithm::BreadthFirst),
            "greedy" | "gbefs" => Ok(SearchAlgorithm::GreedyBestFirst),
            "ucs" | "dijkstra" => Ok(SearchAlgorithm::UniformCost),
            "astar" | "a*" => Ok(SearchAlgorithm::AStar),
            _ => Err(ParseSearchAlgorithmError(s.to_string())),
        }
    }
}
