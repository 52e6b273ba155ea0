pub mod cancellation;
mod constants;
pub mod distance;
pub mod distance_oracle;
pub mod error;
pub mod geopoint;
pub mod map_data;
pub mod memory;
pub mod osm;
pub mod priority_queue;
pub mod routing_graph;
pub mod search;
pub mod spatial_index;
mod stopwatch;
pub mod task;
pub mod waypath;
