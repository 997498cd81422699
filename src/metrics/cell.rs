use std::sync::atomic::{AtomicU64, Ordering};

/// A monotonically increasing metrics counter.
///
/// Counters are bumped concurrently by readers holding only the shared lock,
/// so the cell is a plain atomic. Values are observational and never feed
/// back into eviction decisions.
#[repr(transparent)]
#[derive(Debug, Default)]
pub struct MetricsCounter(AtomicU64);

impl MetricsCounter {
    #[inline]
    pub const fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn incr(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn add(&self, n: u64) {
        if n != 0 {
            self.0.fetch_add(n, Ordering::Relaxed);
        }
    }

    #[inline]
    pub fn reset(&self) {
        self.0.store(0, Ordering::Relaxed);
    }
}
