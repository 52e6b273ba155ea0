use std::time::Instant;

use crate::{
    distance::{Distance, Meters},
    memory::{allocation_tracker::AllocationTracker, memory_statistics::MemoryStatistics},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    Found {
        /// Node indices from start to end, both included.
        path: Vec<usize>,
        distance: Distance<Meters>,
    },
    /// The frontier ran empty before reaching the end node.
    NotFound,
    /// The cancellation token was observed before the search completed.
    Canceled,
}

#[derive(Clone, Debug)]
pub struct SearchResult {
    pub outcome: SearchOutcome,
    pub finished_at: Instant,
    pub memory: MemoryStatistics,
}

impl SearchResult {
    /// Runs `search` with a fresh tracker and records the tracker's final
    /// statistics. Every tracked container must be dropped by the time
    /// `search` returns.
    pub(crate) fn track(search: impl FnOnce(&AllocationTracker) -> SearchOutcome) -> SearchResult {
        let tracker = AllocationTracker::new();
        let outcome = search(&tracker);

        SearchResult {
            outcome,
            finished_at: Instant::now(),
            memory: tracker.statistics(),
        }
    }

    /// Empty unless a path was found.
    pub fn path(&self) -> &[usize] {
        match &self.outcome {
            SearchOutcome::Found { path, .. } => path,
            _ => &[],
        }
    }

    pub fn distance(&self) -> Option<Distance<Meters>> {
        match self.outcome {
            SearchOutcome::Found { distance, .. } => Some(distance),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Found { .. })
    }

    pub fn is_canceled(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Canceled)
    }
}
