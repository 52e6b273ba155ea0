use std::{path::Path, sync::Arc};

use crate::{
    error::{SpatialIndexError, WaypathError},
    geopoint::GeoPoint,
    map_data::MapData,
    osm::osm_reader::read_osm_file,
    routing_graph::RoutingGraph,
    spatial_index::SpatialIndex,
    task::orchestrator::SearchOrchestrator,
};

/// A routing graph together with its spatial index.
pub struct Waypath {
    graph: Arc<RoutingGraph>,
    index: SpatialIndex,
    offset: [f64; 2],
}

impl Waypath {
    pub fn from_map_data(data: &MapData) -> Result<Self, WaypathError> {
        Self::build(data, [0.0, 0.0])
    }

    /// Loads a `.osm.pbf` extract. Planar positions are recentered around
    /// their mean, [`Waypath::snap`] accounts for it.
    pub fn from_osm_file(path: impl AsRef<Path>) -> Result<Self, WaypathError> {
        let mut data = read_osm_file(path)?;
        let offset = data.normalize_positions();
        Self::build(&data, offset)
    }

    fn build(data: &MapData, offset: [f64; 2]) -> Result<Self, WaypathError> {
        let graph = RoutingGraph::from_map_data(data)?;
        let index = SpatialIndex::build_from_graph(&graph);

        Ok(Waypath {
            graph: Arc::new(graph),
            index,
            offset,
        })
    }

    pub fn graph(&self) -> &Arc<RoutingGraph> {
        &self.graph
    }

    pub fn index(&self) -> &SpatialIndex {
        &self.index
    }

    /// Offset subtracted from every projected position.
    pub fn offset(&self) -> [f64; 2] {
        self.offset
    }

    pub fn nearest(&self, point: &[f64; 2]) -> Result<usize, SpatialIndexError> {
        self.index.nearest(point)
    }

    /// Index of the routing node closest to `location`.
    pub fn snap(&self, location: &GeoPoint) -> Result<usize, SpatialIndexError> {
        let [x, y] = location.project();
        self.index.nearest(&[x - self.offset[0], y - self.offset[1]])
    }

    pub fn orchestrator(&self) -> SearchOrchestrator {
        SearchOrchestrator::new(Arc::clone(&self.graph))
    }
}
