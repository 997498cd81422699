//! # Metrics Traits
//!
//! Recording, snapshotting and export are split into small traits so the
//! cache only writes counters while monitoring code reads and publishes them.
//!
//! ```text
//!   ┌─────────────────────────────┐
//!   │ SecondChanceMetricsRecorder │  written by the cache (&self, lock-free)
//!   └──────────────┬──────────────┘
//!                  │
//!   ┌──────────────┴───────────────┐    ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │    │ MetricsExporter<S>           │
//!   │ (bench/test)                 │    │ (production monitoring)      │
//!   └──────────────────────────────┘    └──────────────────────────────┘
//! ```

/// Counters recorded by the second-chance cache.
///
/// Methods take `&self`: the read path records hits while holding only the
/// shared lock.
pub trait SecondChanceMetricsRecorder {
    fn record_get_hit(&self);
    fn record_get_miss(&self);
    fn record_insert_new(&self);
    fn record_insert_update(&self);
    fn record_eviction(&self);
    /// Bitmap words the hand visited while looking for a victim.
    fn record_sweep_words(&self, words: u64);
    /// Words refilled with ejectable bits because every candidate was referenced.
    fn record_second_chance_grants(&self, words: u64);
    fn record_remove_hit(&self);
    fn record_remove_miss(&self);
    /// A removal moved the last occupied slot into the freed position.
    fn record_compaction_move(&self);
    fn record_reset(&self);
}

/// Snapshot provider for bench/testing.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Reset metrics between tests or benchmark iterations.
pub trait MetricsReset {
    fn reset_metrics(&self);
}

/// Export/publish metrics to production monitoring backends.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
