use clap::Args;

use crate::map_args::MapArgs;

#[derive(Args)]
pub struct InfoArgs {
    #[command(flatten)]
    map: MapArgs,
}

pub fn run(args: InfoArgs) -> Result<(), anyhow::Error> {
    let waypath = args.map.load()?;
    let graph = waypath.graph();

    let dead_ends = graph
        .nodes()
        .iter()
        .filter(|node| node.adjacency().is_empty())
        .count();

    println!("nodes:     {}", graph.node_count());
    println!("edges:     {}", graph.edge_count());
    println!("dead ends: {dead_ends}");
    println!("indexed:   {}", waypath.index().len());

    Ok(())
}
