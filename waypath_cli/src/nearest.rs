use clap::Args;
use waypath_core::geopoint::GeoPoint;

use crate::{format::format_distance, map_args::MapArgs, parsers};

#[derive(Args)]
pub struct NearestArgs {
    #[command(flatten)]
    map: MapArgs,

    /// Query point as <lat>,<lng>
    #[arg(short, long, value_parser = parsers::parse_geopoint, allow_hyphen_values = true)]
    point: GeoPoint,
}

pub fn run(args: NearestArgs) -> Result<(), anyhow::Error> {
    let waypath = args.map.load()?;

    let index = waypath.snap(&args.point)?;
    let node = waypath.graph().node(index);

    println!(
        "node {} (index {}) at {:.7},{:.7}, {} away, {} outgoing edges",
        node.id,
        index,
        node.location.lat,
        node.location.lng,
        format_distance(args.point.haversine_distance(&node.location)),
        node.adjacency().len()
    );

    Ok(())
}
