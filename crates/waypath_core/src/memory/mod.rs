pub mod allocation_tracker;
pub mod memory_statistics;
pub mod tracked;
