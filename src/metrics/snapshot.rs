/// Point-in-time copy of the second-chance cache counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SecondChanceMetricsSnapshot {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,

    pub insert_calls: u64,
    pub insert_updates: u64,
    pub insert_new: u64,
    pub evicted_entries: u64,

    pub sweep_words: u64,             // words examined by the hand during evictions
    pub second_chance_grants: u64,    // exhausted words refilled with ejectable bits

    pub remove_calls: u64,
    pub remove_hits: u64,
    pub compaction_moves: u64,

    pub resets: u64,

    // gauges captured at snapshot time
    pub cache_len: usize,
    pub capacity: usize,
}

impl SecondChanceMetricsSnapshot {
    /// Fraction of `get` calls that hit, or `0.0` before any call.
    pub fn hit_rate(&self) -> f64 {
        if self.get_calls == 0 {
            0.0
        } else {
            self.get_hits as f64 / self.get_calls as f64
        }
    }

    /// Average number of bitmap words examined per eviction.
    pub fn sweep_words_per_eviction(&self) -> f64 {
        if self.evicted_entries == 0 {
            0.0
        } else {
            self.sweep_words as f64 / self.evicted_entries as f64
        }
    }
}
