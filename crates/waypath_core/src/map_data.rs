use fxhash::FxHashMap;

use crate::geopoint::GeoPoint;

pub type OsmNodeId = i64;
pub type OsmWayId = i64;

pub struct RawNode {
    pub id: OsmNodeId,
    pub location: GeoPoint,
    pub position: [f64; 2],
}

impl RawNode {
    /// Creates a node positioned at the mercator projection of `location`.
    pub fn new(id: OsmNodeId, location: GeoPoint) -> Self {
        RawNode {
            id,
            location,
            position: location.project(),
        }
    }
}

pub struct RawWay {
    pub id: OsmWayId,
    pub nodes: Vec<OsmNodeId>,
    pub oneway: bool,
}

/// Node table and routable ways, as handed over by a map loader.
#[derive(Default)]
pub struct MapData {
    pub nodes: FxHashMap<OsmNodeId, RawNode>,
    pub highways: Vec<RawWay>,
}

impl MapData {
    pub fn add_node(&mut self, node: RawNode) {
        self.nodes.insert(node.id, node);
    }

    pub fn add_highway(&mut self, way: RawWay) {
        self.highways.push(way);
    }

    /// Moves every planar position so that their mean sits at the origin.
    /// Returns the offset that was subtracted.
    pub fn normalize_positions(&mut self) -> [f64; 2] {
        if self.nodes.is_empty() {
            return [0.0, 0.0];
        }

        let count = self.nodes.len() as f64;
        let mut mean = [0.0, 0.0];
        for node in self.nodes.values() {
            mean[0] += node.position[0] / count;
            mean[1] += node.position[1] / count;
        }

        for node in self.nodes.values_mut() {
            node.position[0] -= mean[0];
            node.position[1] -= mean[1];
        }

        mean
    }
}
