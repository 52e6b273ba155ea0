use crate::{
    distance::{Distance, Meters},
    routing_graph::RoutingGraph,
};

pub trait Heuristic {
    fn estimate(&self, graph: &RoutingGraph, from: usize, to: usize) -> Distance<Meters>;
}

/// Turns a best-first search into Dijkstra.
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    #[inline(always)]
    fn estimate(&self, _graph: &RoutingGraph, _from: usize, _to: usize) -> Distance<Meters> {
        Distance::ZERO
    }
}

/// The graph's distance oracle between the two node locations. Admissible
/// because no road between two points is shorter than the straight line.
pub struct StraightLineHeuristic;

impl Heuristic for StraightLineHeuristic {
    #[inline(always)]
    fn estimate(&self, graph: &RoutingGraph, from: usize, to: usize) -> Distance<Meters> {
        graph.distance(from, to)
    }
}
