pub mod orchestrator;
pub mod search_task;
mod start_signal;
