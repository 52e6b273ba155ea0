use std::path::Path;

use osmpbf::{Element, ElementReader};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    geopoint::GeoPoint,
    map_data::{MapData, RawNode, RawWay},
    stopwatch::Stopwatch,
};

#[derive(Error, Debug)]
pub enum OsmReadError {
    #[error("Failed to read OSM file: {0}")]
    Read(#[from] osmpbf::Error),
}

const HIGHWAY_TAG: &str = "highway";
const ONEWAY_TAG: &str = "oneway";

pub(crate) fn is_highway<'a>(tags: impl Iterator<Item = (&'a str, &'a str)>) -> Option<bool> {
    let mut highway = false;
    let mut oneway = false;

    for (key, value) in tags {
        match key {
            HIGHWAY_TAG => highway = true,
            ONEWAY_TAG => oneway = value == "yes",
            _ => {}
        }
    }

    highway.then_some(oneway)
}

fn accept_way(refs: &[i64]) -> bool {
    refs.len() >= 2
}

/// Reads every node and every `highway=*` way of an `.osm.pbf` file.
pub fn read_osm_file(path: impl AsRef<Path>) -> Result<MapData, OsmReadError> {
    let path = path.as_ref();
    info!("Reading OSM file {}", path.display());
    let stopwatch = Stopwatch::new("osm_reader/read");

    let reader = ElementReader::from_path(path)?;
    let mut node_count = 0_u64;
    let mut way_count = 0_u64;

    let mut data = MapData::default();

    reader.for_each(|element| match element {
        Element::DenseNode(node) => {
            data.add_node(RawNode::new(node.id(), GeoPoint::new(node.lat(), node.lon())));
            node_count += 1;
            if node_count % 1_000_000 == 0 {
                debug!("Processed {} nodes", node_count);
            }
        }
        Element::Node(node) => {
            data.add_node(RawNode::new(node.id(), GeoPoint::new(node.lat(), node.lon())));
            node_count += 1;
            if node_count % 1_000_000 == 0 {
                debug!("Processed {} nodes", node_count);
            }
        }
        Element::Way(way) => {
            let Some(oneway) = is_highway(way.tags()) else {
                return;
            };

            let refs: Vec<i64> = way.refs().collect();
            if !accept_way(&refs) {
                return;
            }

            data.add_highway(RawWay {
                id: way.id(),
                nodes: refs,
                oneway,
            });
            way_count += 1;
            if way_count % 100_000 == 0 {
                debug!("Processed {} ways", way_count);
            }
        }
        Element::Relation(_) => {}
    })?;

    info!(
        "Read {} nodes and {} highways from {} in {:?}",
        node_count,
        data.highways.len(),
        path.display(),
        stopwatch.elapsed()
    );

    Ok(data)
}
