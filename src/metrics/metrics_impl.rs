use crate::metrics::cell::MetricsCounter;
use crate::metrics::snapshot::SecondChanceMetricsSnapshot;
use crate::metrics::traits::{MetricsReset, SecondChanceMetricsRecorder};

#[derive(Debug, Default)]
pub struct SecondChanceMetrics {
    pub get_hits: MetricsCounter,
    pub get_misses: MetricsCounter,
    pub insert_updates: MetricsCounter,
    pub insert_new: MetricsCounter,
    pub evicted_entries: MetricsCounter,
    pub sweep_words: MetricsCounter,
    pub second_chance_grants: MetricsCounter,
    pub remove_hits: MetricsCounter,
    pub remove_misses: MetricsCounter,
    pub compaction_moves: MetricsCounter,
    pub resets: MetricsCounter,
}

impl SecondChanceMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies the counters, adding the gauges supplied by the caller.
    pub fn snapshot(&self, cache_len: usize, capacity: usize) -> SecondChanceMetricsSnapshot {
        let get_hits = self.get_hits.get();
        let get_misses = self.get_misses.get();
        let insert_updates = self.insert_updates.get();
        let insert_new = self.insert_new.get();
        let evicted_entries = self.evicted_entries.get();
        let remove_hits = self.remove_hits.get();
        let remove_misses = self.remove_misses.get();
        SecondChanceMetricsSnapshot {
            get_calls: get_hits + get_misses,
            get_hits,
            get_misses,
            insert_calls: insert_updates + insert_new + evicted_entries,
            insert_updates,
            insert_new,
            evicted_entries,
            sweep_words: self.sweep_words.get(),
            second_chance_grants: self.second_chance_grants.get(),
            remove_calls: remove_hits + remove_misses,
            remove_hits,
            compaction_moves: self.compaction_moves.get(),
            resets: self.resets.get(),
            cache_len,
            capacity,
        }
    }
}

impl SecondChanceMetricsRecorder for SecondChanceMetrics {
    fn record_get_hit(&self) {
        self.get_hits.incr();
    }

    fn record_get_miss(&self) {
        self.get_misses.incr();
    }

    fn record_insert_new(&self) {
        self.insert_new.incr();
    }

    fn record_insert_update(&self) {
        self.insert_updates.incr();
    }

    fn record_eviction(&self) {
        self.evicted_entries.incr();
    }

    fn record_sweep_words(&self, words: u64) {
        self.sweep_words.add(words);
    }

    fn record_second_chance_grants(&self, words: u64) {
        self.second_chance_grants.add(words);
    }

    fn record_remove_hit(&self) {
        self.remove_hits.incr();
    }

    fn record_remove_miss(&self) {
        self.remove_misses.incr();
    }

    fn record_compaction_move(&self) {
        self.compaction_moves.incr();
    }

    fn record_reset(&self) {
        self.resets.incr();
    }
}

impl MetricsReset for SecondChanceMetrics {
    fn reset_metrics(&self) {
        self.get_hits.reset();
        self.get_misses.reset();
        self.insert_updates.reset();
        self.insert_new.reset();
        self.evicted_entries.reset();
        self.sweep_words.reset();
        self.second_chance_grants.reset();
        self.remove_hits.reset();
        self.remove_misses.reset();
        self.compaction_moves.reset();
        self.resets.reset();
    }
}
