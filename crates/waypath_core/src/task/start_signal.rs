use std::time::Instant;

use parking_lot::{Condvar, Mutex};

/// One-shot handshake between a spawning thread and its worker: the worker
/// publishes the instant it began, the spawner blocks until it has it.
pub(crate) struct StartSignal {
    started_at: Mutex<Option<Instant>>,
    cvar: Condvar,
}

impl StartSignal {
    pub(crate) fn new() -> Self {
        Self {
            started_at: Mutex::new(None),
            cvar: Condvar::new(),
        }
    }

    /// Only the first call has an effect.
    pub(crate) fn publish(&self, instant: Instant) {
        let mut started_at = self.started_at.lock();
        if started_at.is_none() {
            *started_at = Some(instant);
            self.cvar.notify_all();
        }
    }

    pub(crate) fn wait(&self) -> Instant {
        let mut started_at = self.started_at.lock();
        loop {
            if let Some(instant) = *started_at {
                return instant;
            }
            self.cvar.wait(&mut started_at);
        }
    }
}
