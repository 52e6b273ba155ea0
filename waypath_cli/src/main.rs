use clap::{Parser, Subcommand};

#[cfg(not(feature = "dhat-heap"))]
use mimalloc::MiMalloc;

use crate::{info::InfoArgs, nearest::NearestArgs, route::RouteArgs};

mod format;
mod info;
mod map_args;
mod nearest;
mod parsers;
mod route;

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

#[cfg(not(feature = "dhat-heap"))]
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Runs the selected search algorithms side by side between two points
    #[command(visible_alias = "r")]
    Route {
        #[command(flatten)]
        args: RouteArgs,
    },
    /// Finds the routing node closest to a point
    Nearest {
        #[command(flatten)]
        args: NearestArgs,
    },
    /// Prints the size of the routing graph built from a map
    Info {
        #[command(flatten)]
        args: InfoArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::Route { args } => route::run(args)?,
        Commands::Nearest { args } => nearest::run(args)?,
        Commands::Info { args } => info::run(args)?,
    }

    Ok(())
}
