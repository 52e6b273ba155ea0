use std::time::{Duration, Instant};

use tracing::debug;

/// Times one loading phase and reports it as a `debug` event.
pub(crate) struct Stopwatch {
    phase: &'static str,
    started_at: Instant,
}

impl Stopwatch {
    pub(crate) fn new(phase: &'static str) -> Self {
        Self {
            phase,
            started_at: Instant::now(),
        }
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    pub(crate) fn report(&self) {
        debug!(phase = self.phase, elapsed = ?self.elapsed(), "Phase finished");
    }
}
