use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// Cooperative stop signal shared between a search and whoever started it.
///
/// Cancelling is a one-way broadcast: once set, the flag stays set.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    canceled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.canceled.store(true, Ordering::Release);
    }

    #[inline(always)]
    pub fn is_canceled(&self) -> bool {
        self.canceled.load(Ordering::Acquire)
    }
}
