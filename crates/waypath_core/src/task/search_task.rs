use std::{
    sync::Arc,
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

use parking_lot::Mutex;
use thiserror::Error;
use tracing::{debug, error};

use crate::{
    cancellation::CancellationToken,
    routing_graph::RoutingGraph,
    search::{search_algorithm::SearchAlgorithm, search_result::SearchResult},
};

use super::start_signal::StartSignal;

#[derive(Error, Debug)]
pub enum TaskError {
    #[error("Node {node} is out of range for a graph of {node_count} nodes")]
    NodeOutOfRange { node: usize, node_count: usize },
    #[error("Failed to spawn search worker: {0}")]
    Spawn(#[from] std::io::Error),
}

#[derive(Clone, Debug)]
pub enum TaskStatus {
    NotStarted,
    Running { elapsed: Duration },
    Finished { result: SearchResult, elapsed: Duration },
}

impl TaskStatus {
    pub fn is_finished(&self) -> bool {
        matches!(self, TaskStatus::Finished { .. })
    }
}

/// Runs one algorithm at a time on a dedicated worker thread.
///
/// Dropping the task cancels and joins its worker.
pub struct SearchTask {
    algorithm: SearchAlgorithm,
    token: CancellationToken,
    worker: Option<JoinHandle<()>>,
    started_at: Option<Instant>,
    result: Arc<Mutex<Option<SearchResult>>>,
}

impl SearchTask {
    pub fn new(algorithm: SearchAlgorithm) -> Self {
        Self {
            algorithm,
            token: CancellationToken::new(),
            worker: None,
            started_at: None,
            result: Arc::new(Mutex::new(None)),
        }
    }

    pub fn algorithm(&self) -> SearchAlgorithm {
        self.algorithm
    }

    /// Tears down any previous run, then starts a new one. Returns once the
    /// worker has recorded its start instant.
    pub fn run(
        &mut self,
        graph: &Arc<RoutingGraph>,
        start: usize,
        end: usize,
    ) -> Result<(), TaskError> {
        for node in [start, end] {
            if node >= graph.node_count() {
                return Err(TaskError::NodeOutOfRange {
                    node,
                    node_count: graph.node_count(),
                });
            }
        }

        self.reset();
        self.token = CancellationToken::new();

        let signal = Arc::new(StartSignal::new());
        let worker_signal = Arc::clone(&signal);
        let worker_graph = Arc::clone(graph);
        let worker_token = self.token.clone();
        let worker_result = Arc::clone(&self.result);
        let algorithm = self.algorithm;

        let worker = thread::Builder::new()
            .name(algorithm.short_name().to_string())
            .spawn(move || {
                worker_signal.publish(Instant::now());

                let result = algorithm.search(&worker_graph, start, end, &worker_token);
                debug!(
                    algorithm = algorithm.short_name(),
                    found = result.is_found(),
                    canceled = result.is_canceled(),
                    peak_allocated = result.memory.peak_allocated,
                    "Search finished"
                );

                *worker_result.lock() = Some(result);
            })?;

        self.started_at = Some(signal.wait());
        self.worker = Some(worker);

        Ok(())
    }

    /// Asks the worker to stop without waiting for it.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Cancels and joins the worker, then forgets the run entirely.
    pub fn reset(&mut self) {
        self.token.cancel();

        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                error!(
                    algorithm = self.algorithm.short_name(),
                    "Search worker panicked"
                );
            }
        }

        *self.result.lock() = None;
        self.started_at = None;
    }

    pub fn poll(&self) -> TaskStatus {
        let Some(started_at) = self.started_at else {
            return TaskStatus::NotStarted;
        };

        match self.result.lock().as_ref() {
            Some(result) => TaskStatus::Finished {
                elapsed: result.finished_at.duration_since(started_at),
                result: result.clone(),
            },
            None => TaskStatus::Running {
                elapsed: started_at.elapsed(),
            },
        }
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && self.result.lock().is_none()
    }
}

impl Drop for SearchTask {
    fn drop(&mut self) {
        self.reset();
    }
}
