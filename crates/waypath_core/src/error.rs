use thiserror::Error;

use crate::{
    map_data::{OsmNodeId, OsmWayId},
    osm::osm_reader::OsmReadError,
    task::search_task::TaskError,
};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GraphError {
    #[error("Way {way_id} references unknown node {node_id}")]
    MalformedGraph {
        way_id: OsmWayId,
        node_id: OsmNodeId,
    },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SpatialIndexError {
    #[error("Spatial index is empty")]
    EmptyIndex,
}

#[derive(Error, Debug)]
pub enum WaypathError {
    #[error(transparent)]
    OsmRead(#[from] OsmReadError),
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    SpatialIndex(#[from] SpatialIndexError),
    #[error(transparent)]
    Task(#[from] TaskError),
}
