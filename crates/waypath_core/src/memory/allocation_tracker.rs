use std::cell::Cell;

use thiserror::Error;
use tracing::error;

use super::memory_statistics::MemoryStatistics;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TrackerError {
    #[error("Freed {freed} bytes while only {current} bytes are allocated")]
    AccountingViolation { freed: usize, current: usize },
}

/// Byte accounting for the containers of a single search run.
///
/// A tracker lives on the thread running the search and is lent to every
/// container the search creates.
#[derive(Default)]
pub struct AllocationTracker {
    statistics: Cell<MemoryStatistics>,
}

impl AllocationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&self, bytes: usize) {
        let mut statistics = self.statistics.get();
        statistics.record_alloc(bytes);
        self.statistics.set(statistics);
    }

    pub fn try_free(&self, bytes: usize) -> Result<(), TrackerError> {
        let mut statistics = self.statistics.get();
        if !statistics.record_free(bytes) {
            return Err(TrackerError::AccountingViolation {
                freed: bytes,
                current: statistics.current_allocated,
            });
        }
        self.statistics.set(statistics);
        Ok(())
    }

    /// Panics in debug builds when the free exceeds the live bytes, clamps the
    /// live bytes to zero otherwise.
    pub fn free(&self, bytes: usize) {
        if let Err(err) = self.try_free(bytes) {
            if cfg!(debug_assertions) {
                panic!("Allocation accounting violation: {err}");
            }
            error!("Allocation accounting violation: {err}");

            let mut statistics = self.statistics.get();
            statistics.current_allocated = 0;
            self.statistics.set(statistics);
        }
    }

    pub fn statistics(&self) -> MemoryStatistics {
        self.statistics.get()
    }
}
