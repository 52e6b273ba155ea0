use std::sync::Arc;

use fxhash::FxHashMap;
use tracing::info;

use crate::{
    distance::{Distance, Meters},
    distance_oracle::{DistanceOracle, HaversineDistance},
    error::GraphError,
    geopoint::GeoPoint,
    map_data::{MapData, OsmNodeId},
    stopwatch::Stopwatch,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub weight: Distance<Meters>,
    pub to: usize,
}

pub struct RoutingNode {
    pub id: OsmNodeId,
    pub location: GeoPoint,
    pub position: [f64; 2],
    adjacency: Vec<Edge>,
}

impl RoutingNode {
    /// Outgoing edges, sorted by ascending weight.
    pub fn adjacency(&self) -> &[Edge] {
        &self.adjacency
    }
}

/// Static road graph restricted to the nodes of routable ways.
///
/// Nodes are indexed densely in ascending external id order. Nothing can be
/// added or removed once the graph is built, so it can be shared freely
/// between search threads.
pub struct RoutingGraph {
    nodes: Vec<RoutingNode>,
    node_index: FxHashMap<OsmNodeId, usize>,
    edge_count: usize,
    oracle: Arc<dyn DistanceOracle>,
}

impl RoutingGraph {
    pub fn from_map_data(data: &MapData) -> Result<RoutingGraph, GraphError> {
        Self::build(data, HaversineDistance)
    }

    pub fn build(
        data: &MapData,
        oracle: impl DistanceOracle + 'static,
    ) -> Result<RoutingGraph, GraphError> {
        let stopwatch = Stopwatch::new("routing_graph/build");

        let mut ids: Vec<OsmNodeId> = Vec::new();
        for way in &data.highways {
            for &node_id in &way.nodes {
                if !data.nodes.contains_key(&node_id) {
                    return Err(GraphError::MalformedGraph {
                        way_id: way.id,
                        node_id,
                    });
                }
                ids.push(node_id);
            }
        }
        ids.sort_unstable();
        ids.dedup();

        let mut node_index = FxHashMap::default();
        node_index.reserve(ids.len());
        let mut nodes = Vec::with_capacity(ids.len());

        for (index, id) in ids.into_iter().enumerate() {
            let raw = &data.nodes[&id];
            node_index.insert(id, index);
            nodes.push(RoutingNode {
                id,
                location: raw.location,
                position: raw.position,
                adjacency: Vec::new(),
            });
        }

        let mut edge_count = 0;
        for way in &data.highways {
            for pair in way.nodes.windows(2) {
                let prev = node_index[&pair[0]];
                let cur = node_index[&pair[1]];
                let weight = oracle.distance(&nodes[prev].location, &nodes[cur].location);

                nodes[prev].adjacency.push(Edge { weight, to: cur });
                edge_count += 1;

                if !way.oneway {
                    nodes[cur].adjacency.push(Edge { weight, to: prev });
                    edge_count += 1;
                }
            }
        }

        // Stable: equal weights keep their insertion order.
        for node in &mut nodes {
            node.adjacency.sort_by_key(|edge| edge.weight);
        }

        info!(
            "Built routing graph with {} nodes and {} edges",
            nodes.len(),
            edge_count
        );
        stopwatch.report();

        Ok(RoutingGraph {
            nodes,
            node_index,
            edge_count,
            oracle: Arc::new(oracle),
        })
    }

    pub fn node(&self, index: usize) -> &RoutingNode {
        &self.nodes[index]
    }

    pub fn nodes(&self) -> &[RoutingNode] {
        &self.nodes
    }

    pub fn adjacency(&self, index: usize) -> &[Edge] {
        &self.nodes[index].adjacency
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn index_of(&self, id: OsmNodeId) -> Option<usize> {
        self.node_index.get(&id).copied()
    }

    /// Oracle distance between the locations of two nodes.
    #[inline(always)]
    pub fn distance(&self, from: usize, to: usize) -> Distance<Meters> {
        self.oracle
            .distance(&self.nodes[from].location, &self.nodes[to].location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        map_data::{RawNode, RawWay},
        meters,
        test_graph_utils::test_graph::{PlanarDistance, map_data_from},
    };

    #[test]
    fn excludes_nodes_outside_highways() {
        let mut data = map_data_from(&[(10, 0.0, 0.0), (20, 3.0, 4.0), (30, 9.0, 9.0)], &[]);
        data.add_highway(RawWay {
            id: 1,
            nodes: vec![20, 10],
            oneway: false,
        });

        let graph = RoutingGraph::build(&data, PlanarDistance).unwrap();

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.index_of(10), Some(0));
        assert_eq!(graph.index_of(20), Some(1));
        assert_eq!(graph.index_of(30), None);
    }

    #[test]
    fn bidirectional_way_adds_both_directions() {
        let data = map_data_from(
            &[(1, 0.0, 0.0), (2, 3.0, 4.0)],
            &[(1, vec![1, 2], false)],
        );
        let graph = RoutingGraph::build(&data, PlanarDistance).unwrap();

        assert_eq!(graph.adjacency(0), &[Edge { weight: meters!(5), to: 1 }]);
        assert_eq!(graph.adjacency(1), &[Edge { weight: meters!(5), to: 0 }]);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn oneway_way_adds_forward_only() {
        let data = map_data_from(
            &[(1, 0.0, 0.0), (2, 3.0, 4.0)],
            &[(1, vec![2, 1], true)],
        );
        let graph = RoutingGraph::build(&data, PlanarDistance).unwrap();

        assert!(graph.adjacency(0).is_empty());
        assert_eq!(graph.adjacency(1), &[Edge { weight: meters!(5), to: 0 }]);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn adjacency_sorted_by_weight() {
        let data = map_data_from(
            &[(1, 0.0, 0.0), (2, 10.0, 0.0), (3, 1.0, 0.0), (4, 0.0, 5.0)],
            &[
                (1, vec![1, 2], false),
                (2, vec![1, 3], false),
                (3, vec![1, 4], false),
            ],
        );
        let graph = RoutingGraph::build(&data, PlanarDistance).unwrap();

        let weights: Vec<_> = graph.adjacency(0).iter().map(|edge| edge.weight).collect();
        assert_eq!(weights, vec![meters!(1), meters!(5), meters!(10)]);
    }

    #[test]
    fn equal_weights_keep_insertion_order() {
        let data = map_data_from(
            &[(1, 0.0, 0.0), (2, 1.0, 0.0), (3, 0.0, 1.0), (4, -1.0, 0.0)],
            &[
                (1, vec![1, 4], false),
                (2, vec![1, 2], false),
                (3, vec![3, 1], false),
            ],
        );
        let graph = RoutingGraph::build(&data, PlanarDistance).unwrap();

        let neighbors: Vec<_> = graph.adjacency(0).iter().map(|edge| edge.to).collect();
        assert_eq!(neighbors, vec![3, 1, 2]);
    }

    #[test]
    fn unknown_node_is_malformed() {
        let data = map_data_from(&[(1, 0.0, 0.0)], &[(7, vec![1, 99], false)]);

        let result = RoutingGraph::build(&data, PlanarDistance);
        assert_eq!(
            result.err(),
            Some(GraphError::MalformedGraph {
                way_id: 7,
                node_id: 99
            })
        );
    }

    #[test]
    fn shared_nodes_are_deduplicated() {
        let data = map_data_from(
            &[(1, 0.0, 0.0), (2, 1.0, 0.0), (3, 2.0, 0.0)],
            &[(1, vec![1, 2], false), (2, vec![2, 3], false)],
        );
        let graph = RoutingGraph::build(&data, PlanarDistance).unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.adjacency(1).len(), 2);
    }

    #[test]
    fn empty_input_builds_empty_graph() {
        let graph = RoutingGraph::build(&MapData::default(), PlanarDistance).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn keeps_node_locations_and_positions() {
        let mut data = MapData::default();
        data.add_node(RawNode::new(5, GeoPoint::new(50.0, 4.0)));
        data.add_node(RawNode::new(6, GeoPoint::new(50.001, 4.0)));
        data.add_highway(RawWay {
            id: 1,
            nodes: vec![5, 6],
            oneway: false,
        });

        let graph = RoutingGraph::from_map_data(&data).unwrap();
        let node = graph.node(0);

        assert_eq!(node.id, 5);
        assert_eq!(node.location, GeoPoint::new(50.0, 4.0));
        assert_eq!(node.position, GeoPoint::new(50.0, 4.0).project());
        let meters = graph.distance(0, 1).value();
        assert!((meters - 111.2).abs() < 0.5, "got {meters}");
    }
}
