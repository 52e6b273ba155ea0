use std::sync::Arc;

use tracing::debug;

use crate::{routing_graph::RoutingGraph, search::search_algorithm::SearchAlgorithm};

use super::search_task::{SearchTask, TaskError, TaskStatus};

struct Slot {
    task: SearchTask,
    enabled: bool,
}

/// One task slot per algorithm, all sharing the same graph.
///
/// Every slot starts enabled. Once both endpoints are known, enabled slots run
/// against them until the endpoints change or the slot is disabled.
pub struct SearchOrchestrator {
    graph: Arc<RoutingGraph>,
    slots: Vec<Slot>,
    endpoints: Option<(usize, usize)>,
}

impl SearchOrchestrator {
    pub fn new(graph: Arc<RoutingGraph>) -> Self {
        let slots = SearchAlgorithm::ALL
            .into_iter()
            .map(|algorithm| Slot {
                task: SearchTask::new(algorithm),
                enabled: true,
            })
            .collect();

        Self {
            graph,
            slots,
            endpoints: None,
        }
    }

    pub fn graph(&self) -> &Arc<RoutingGraph> {
        &self.graph
    }

    pub fn endpoints(&self) -> Option<(usize, usize)> {
        self.endpoints
    }

    pub fn is_enabled(&self, algorithm: SearchAlgorithm) -> bool {
        self.slots[algorithm.index()].enabled
    }

    /// Enabling an idle slot starts it when the endpoints are known. Disabling
    /// a slot tears its run down.
    pub fn set_enabled(
        &mut self,
        algorithm: SearchAlgorithm,
        enabled: bool,
    ) -> Result<(), TaskError> {
        let slot = &mut self.slots[algorithm.index()];
        slot.enabled = enabled;

        if !enabled {
            slot.task.reset();
            return Ok(());
        }

        if let Some((start, end)) = self.endpoints {
            if matches!(slot.task.poll(), TaskStatus::NotStarted) {
                slot.task.run(&self.graph, start, end)?;
            }
        }

        Ok(())
    }

    /// Resets every slot and starts the enabled ones from `start` to `end`.
    pub fn set_endpoints(&mut self, start: usize, end: usize) -> Result<(), TaskError> {
        let node_count = self.graph.node_count();
        if let Some(node) = [start, end].into_iter().find(|&node| node >= node_count) {
            return Err(TaskError::NodeOutOfRange { node, node_count });
        }

        debug!(start, end, "Starting searches");

        for slot in &mut self.slots {
            slot.task.reset();
        }
        self.endpoints = Some((start, end));

        for slot in self.slots.iter_mut().filter(|slot| slot.enabled) {
            slot.task.run(&self.graph, start, end)?;
        }

        Ok(())
    }

    /// Asks every running search to stop, without waiting.
    pub fn cancel_all(&self) {
        for slot in &self.slots {
            slot.task.cancel();
        }
    }

    /// Tears down every run and forgets the endpoints.
    pub fn reset_all(&mut self) {
        for slot in &mut self.slots {
            slot.task.reset();
        }
        self.endpoints = None;
    }

    pub fn status(&self, algorithm: SearchAlgorithm) -> TaskStatus {
        self.slots[algorithm.index()].task.poll()
    }

    /// Status of every enabled slot, in [`SearchAlgorithm::ALL`] order.
    pub fn statuses(&self) -> Vec<(SearchAlgorithm, TaskStatus)> {
        self.slots
            .iter()
            .filter(|slot| slot.enabled)
            .map(|slot| (slot.task.algorithm(), slot.task.poll()))
            .collect()
    }

    pub fn is_running(&self) -> bool {
        self.slots.iter().any(|slot| slot.task.is_running())
    }
}
