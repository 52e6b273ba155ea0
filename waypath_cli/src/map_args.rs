use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;
use waypath_core::waypath::Waypath;

#[derive(Args)]
pub struct MapArgs {
    /// Path to an .osm.pbf extract
    #[arg(short, long, env = "WAYPATH_MAP")]
    map: PathBuf,
}

impl MapArgs {
    pub fn load(&self) -> Result<Waypath, anyhow::Error> {
        info!("Loading map {:?}", self.map);
        Waypath::from_osm_file(&self.map)
            .with_context(|| format!("Failed to load map {}", self.map.display()))
    }
}
