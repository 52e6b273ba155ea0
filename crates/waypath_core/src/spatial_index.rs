use rstar::{RTree, primitives::GeomWithData};
use tracing::info;

use crate::{error::SpatialIndexError, routing_graph::RoutingGraph, stopwatch::Stopwatch};

type IndexedNode = GeomWithData<[f64; 2], usize>;

/// Static nearest-node lookup over the planar positions of a [`RoutingGraph`].
///
/// The positions are copied into the tree, so the index stays valid for as
/// long as the graph it was built from is not replaced.
pub struct SpatialIndex {
    tree: RTree<IndexedNode>,
}

impl SpatialIndex {
    pub fn build_from_graph(graph: &RoutingGraph) -> SpatialIndex {
        let stopwatch = Stopwatch::new("spatial_index/build");

        let tree = RTree::bulk_load(
            graph
                .nodes()
                .iter()
                .enumerate()
                .map(|(index, node)| IndexedNode::new(node.position, index))
                .collect(),
        );

        info!("Built spatial index over {} nodes", tree.size());
        stopwatch.report();

        SpatialIndex { tree }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Index of the node closest to `point` in the plane. Among nodes at the
    /// same distance the lowest index wins.
    pub fn nearest(&self, point: &[f64; 2]) -> Result<usize, SpatialIndexError> {
        let mut candidates = self.tree.nearest_neighbor_iter_with_distance_2(point);

        let (first, best_distance) = candidates.next().ok_or(SpatialIndexError::EmptyIndex)?;

        Ok(candidates
            .take_while(|&(_, distance)| distance <= best_distance)
            .map(|(candidate, _)| candidate.data)
            .fold(first.data, usize::min))
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::*;
    use crate::{
        map_data::MapData,
        test_graph_utils::test_graph::{create_detour_graph, create_grid_graph},
    };

    #[test]
    fn nearest_on_detour_graph() {
        let graph = create_detour_graph();
        let index = SpatialIndex::build_from_graph(&graph);

        assert_eq!(index.len(), 5);
        assert_eq!(index.nearest(&[0.5, 0.5]), Ok(0));
        assert_eq!(index.nearest(&[9.4, 0.1]), Ok(1));
        assert_eq!(index.nearest(&[8.0, -10.0]), Ok(2));
        assert_eq!(index.nearest(&[100.0, 0.0]), Ok(3));
        assert_eq!(index.nearest(&[2.0, 2.0]), Ok(4));
    }

    #[test]
    fn ties_resolve_to_lowest_index() {
        let graph = create_detour_graph();
        let index = SpatialIndex::build_from_graph(&graph);

        // Equidistant from Bait (9, 0) and Goal (10, 0)
        assert_eq!(index.nearest(&[9.5, 3.0]), Ok(1));
    }

    #[test]
    fn matches_linear_scan() {
        let graph = create_grid_graph(30, 30, 17);
        let index = SpatialIndex::build_from_graph(&graph);
        let mut rng = StdRng::seed_from_u64(4);

        for _ in 0..500 {
            let point = [rng.random_range(-50.0..350.0), rng.random_range(-50.0..350.0)];

            let squared = |position: &[f64; 2]| {
                (position[0] - point[0]).powi(2) + (position[1] - point[1]).powi(2)
            };
            let expected = graph
                .nodes()
                .iter()
                .map(|node| squared(&node.position))
                .fold(f64::INFINITY, f64::min);

            let found = index.nearest(&point).unwrap();
            assert_eq!(squared(&graph.node(found).position), expected);
        }
    }

    #[test]
    fn empty_index() {
        let graph = RoutingGraph::from_map_data(&MapData::default()).unwrap();
        let index = SpatialIndex::build_from_graph(&graph);

        assert!(index.is_empty());
        assert_eq!(index.nearest(&[0.0, 0.0]), Err(SpatialIndexError::EmptyIndex));
    }
}
