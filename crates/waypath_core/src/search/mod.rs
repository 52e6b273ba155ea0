pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod greedy_best_first;
pub mod heuristic;
mod path_builder;
pub mod search_algorithm;
pub mod search_result;
pub mod uniform_cost;
