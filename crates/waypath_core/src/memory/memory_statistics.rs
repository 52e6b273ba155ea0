/// Byte counts of one search run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemoryStatistics {
    /// Cumulative bytes ever allocated.
    pub total_allocated: usize,
    /// Largest amount of bytes live at the same time.
    pub peak_allocated: usize,
    /// Bytes live right now.
    pub current_allocated: usize,
}

impl MemoryStatistics {
    pub fn record_alloc(&mut self, bytes: usize) {
        self.total_allocated += bytes;
        self.current_allocated += bytes;
        self.peak_allocated = self.peak_allocated.max(self.current_allocated);
    }

    /// Returns `false`, and leaves the counters untouched, when more bytes are
    /// freed than are currently live.
    pub fn record_free(&mut self, bytes: usize) -> bool {
        match self.current_allocated.checked_sub(bytes) {
            Some(current) => {
                self.current_allocated = current;
                true
            }
            None => false,
        }
    }
}
