//! Concurrent second-chance (clock) cache with an atomic ejectable bitmap.
//!
//! Implements the Clock approximation of LRU over a fixed slot table. Instead
//! of a `referenced` flag per entry, every slot owns one bit in an array of
//! `AtomicU64` words, so a cache hit marks the entry with a single
//! `fetch_and` while holding only the shared side of the lock.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                     SecondChanceCache<K, V> Layout                          │
//! │                                                                             │
//! │   RwLock<SecondChanceCore<K, V>>                                            │
//! │   ┌─────────────────────────────────────────────────────────────────────┐   │
//! │   │  table: SlotTable<K, V>                                             │   │
//! │   │    index: FxHashMap<K, usize>   slots: [0, len) occupied, no gaps   │   │
//! │   │                                                                     │   │
//! │   │  bitmap: EjectableBitmap        1 = ejectable, 0 = referenced       │   │
//! │   │    word 0: ...0010_0000  ◄── slot 5 ejectable                       │   │
//! │   │                                                                     │   │
//! │   │  hand: ClockHand { word, mask }  resumes the sweep across inserts   │   │
//! │   └─────────────────────────────────────────────────────────────────────┘   │
//! │                                                                             │
//! │   get / contains ─► read lock  (get clears the slot bit atomically)         │
//! │   add / remove / items / reset / init ─► write lock                         │
//! └─────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Algorithm
//!
//! ```text
//! GET(key):
//!   1. idx = index[key]
//!   2. bitmap[idx / 64] &= slot.keep          (referenced, second chance)
//!   3. return value
//!
//! ADD(key, value):
//!   1. key present      → replace value, clear bit          → Replaced(old)
//!   2. len < capacity   → append at len, clear bit           → Inserted
//!   3. full             → SWEEP, replace victim, clear bit   → Evicted(old)
//!
//! SWEEP():
//!   candidates = bitmap[hand.word] & hand.mask
//!   while candidates == 0:
//!     bitmap[hand.word] = !0                 // whole word gets a second chance
//!     hand.advance_word()
//!     candidates = bitmap[hand.word]
//!   bit = trailing_zeros(candidates)          // lowest ejectable slot wins
//!   hand.mask = !0 << (bit + 1)               // next word once bit 63 is used
//!   return hand.word * 64 + bit
//!
//! REMOVE(key):
//!   1. drop key from index, len -= 1
//!   2. idx != len → move slot[len] into idx, carry its bit along
//!   3. empty slot[len], mark it ejectable
//! ```
//!
//! ## Performance Characteristics
//!
//! | Operation  | Time        | Lock      | Notes                                |
//! |------------|-------------|-----------|--------------------------------------|
//! | `get`      | O(1)        | shared    | Hash lookup + one atomic AND         |
//! | `contains` | O(1)        | shared    | Hash lookup, bitmap untouched        |
//! | `add`      | O(1) amort. | exclusive | Sweep scans 64 slots per word        |
//! | `remove`   | O(1)        | exclusive | Swap-with-last, no compaction scan   |
//! | `items`    | O(n)        | exclusive | Guard held until the iterator drops  |
//! | `reset`    | O(n)        | exclusive | Keeps allocations                    |
//!
//! ## Capacity
//!
//! Capacity is always a positive multiple of 64 so that every bitmap word is
//! fully backed by slots. Requests are rounded up; `0` becomes `64`.
//!
//! ## Example Usage
//!
//! ```
//! use clockbits::policy::second_chance::{AddOutcome, SecondChanceCache};
//!
//! let cache = SecondChanceCache::new(100);
//! assert_eq!(cache.capacity(), 128);
//!
//! assert_eq!(cache.add("page1", 1), AddOutcome::Inserted);
//! assert_eq!(cache.add("page1", 2), AddOutcome::Replaced(1));
//!
//! // A hit grants a second chance.
//! assert_eq!(cache.get(&"page1"), Some(2));
//!
//! // Membership checks leave eviction state alone.
//! assert!(cache.contains(&"page1"));
//! assert_eq!(cache.remove(&"page1"), Some(2));
//! assert!(cache.is_empty());
//! ```

use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;

use parking_lot::{RwLock, RwLockWriteGuard};

use crate::ds::{ClockHand, EjectableBitmap, SlotTable, WORD_BITS, keep_mask};
use crate::error::InvariantError;
use crate::traits::{ConcurrentCache, SharedCache};

#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::SecondChanceMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::SecondChanceMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{MetricsReset, MetricsSnapshotProvider, SecondChanceMetricsRecorder};

/// Smallest capacity a cache can have: one full bitmap word.
pub const MIN_CAPACITY: usize = WORD_BITS;

/// Largest capacity [`round_capacity`] can return.
pub const MAX_CAPACITY: usize = usize::MAX & !(WORD_BITS - 1);

/// Rounds `capacity` up to the next multiple of 64, with a minimum of 64.
///
/// ```
/// use clockbits::policy::second_chance::round_capacity;
///
/// assert_eq!(round_capacity(0), 64);
/// assert_eq!(round_capacity(64), 64);
/// assert_eq!(round_capacity(65), 128);
/// ```
///
/// Requests too close to `usize::MAX` to round up are clamped to the largest
/// multiple of 64; allocating that many slots then fails in `Vec`.
#[inline]
pub fn round_capacity(capacity: usize) -> usize {
    capacity
        .max(MIN_CAPACITY)
        .checked_next_multiple_of(WORD_BITS)
        .unwrap_or(MAX_CAPACITY)
}

/// What [`add`](SecondChanceCache::add) did with the new pair.
///
/// `Replaced` and `Evicted` both hand back a previously stored value; they
/// differ in whether the displaced value belonged to the same key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome<K, V> {
    /// The pair went into a never-used slot.
    Inserted,
    /// The key was present; its old value is returned.
    Replaced(V),
    /// The cache was full; a different entry was evicted to make room.
    Evicted { key: K, value: V },
}

impl<K, V> AddOutcome<K, V> {
    /// Returns `true` unless the pair went into a free slot.
    #[inline]
    pub fn had_prior(&self) -> bool {
        !matches!(self, AddOutcome::Inserted)
    }

    /// Returns `true` if a different key was evicted to make room.
    #[inline]
    pub fn is_eviction(&self) -> bool {
        matches!(self, AddOutcome::Evicted { .. })
    }

    /// Collapses the outcome to the displaced value, if any.
    #[inline]
    pub fn into_prior(self) -> Option<V> {
        match self {
            AddOutcome::Inserted => None,
            AddOutcome::Replaced(value) | AddOutcome::Evicted { value, .. } => Some(value),
        }
    }
}

/// Work done by one eviction sweep.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SweepStats {
    /// Words inspected, including the one the victim came from.
    pub words_visited: u64,
    /// Exhausted words refilled with ejectable bits.
    pub words_refilled: u64,
}

/// Unsynchronized second-chance engine.
///
/// Structural operations take `&mut self`. [`get`](Self::get) takes `&self`
/// and only touches the bitmap through atomic word updates, which is what
/// lets [`SecondChanceCache`] serve hits under a shared lock.
pub struct SecondChanceCore<K, V> {
    table: SlotTable<K, V>,
    bitmap: EjectableBitmap,
    hand: ClockHand,
}

impl<K, V> SecondChanceCore<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty core with `capacity` rounded by [`round_capacity`].
    pub fn new(capacity: usize) -> Self {
        let capacity = round_capacity(capacity);
        Self {
            table: SlotTable::with_capacity(capacity),
            bitmap: EjectableBitmap::new(capacity / WORD_BITS),
            hand: ClockHand::new(),
        }
    }

    /// Discards all contents and reallocates for `capacity`.
    pub fn init(&mut self, capacity: usize) {
        *self = Self::new(capacity);
    }

    /// Empties the core while keeping its allocations.
    pub fn reset(&mut self) {
        self.table.clear();
        self.bitmap.fill_all();
        self.hand.reset();
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.table.lookup(key).is_some()
    }

    /// Returns `key`'s value and marks its slot referenced.
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        let idx = self.table.lookup(key)?;
        let slot = self.table.get(idx)?;
        self.bitmap.clear_with_mask(idx, slot.keep);
        Some(&slot.value)
    }

    /// Returns `key`'s value without touching its ejectable bit.
    #[inline]
    pub fn peek(&self, key: &K) -> Option<&V> {
        let idx = self.table.lookup(key)?;
        self.table.get(idx).map(|slot| &slot.value)
    }

    /// Inserts or replaces `key`, evicting through the clock sweep when full.
    pub fn add(&mut self, key: K, value: V) -> AddOutcome<K, V> {
        self.add_with_stats(key, value).0
    }

    /// Same as [`add`](Self::add), merged into a single "displaced value" signal.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.add(key, value).into_prior()
    }

    pub(crate) fn add_with_stats(&mut self, key: K, value: V) -> (AddOutcome<K, V>, SweepStats) {
        if let Some(idx) = self.table.lookup(&key)
            && let Some(slot) = self.table.get_mut(idx)
        {
            let old = std::mem::replace(&mut slot.value, value);
            self.bitmap.clear_with_mask(idx, slot.keep);
            return (AddOutcome::Replaced(old), SweepStats::default());
        }

        if !self.table.is_full() {
            let idx = self.table.push(key, value);
            self.bitmap.clear_bit(idx);
            return (AddOutcome::Inserted, SweepStats::default());
        }

        let (victim, stats) = self.sweep();
        let (old_key, old_value) = self
            .table
            .replace(victim, key, value)
            .expect("full table has an occupied victim slot");
        self.bitmap.clear_bit(victim);
        (
            AddOutcome::Evicted {
                key: old_key,
                value: old_value,
            },
            stats,
        )
    }

    /// Advances the hand to the next ejectable slot and returns its index.
    ///
    /// Only called on a full table, so every bit belongs to an occupied slot.
    /// Terminates within `word_count + 1` words: a refilled word is all ones
    /// when the hand comes back to it.
    fn sweep(&mut self) -> (usize, SweepStats) {
        let words = self.bitmap.word_count();
        let mut stats = SweepStats {
            words_visited: 1,
            words_refilled: 0,
        };

        let mut candidates = self.bitmap.load(self.hand.word()) & self.hand.mask();
        while candidates == 0 {
            self.bitmap.fill(self.hand.word());
            stats.words_refilled += 1;
            self.hand.advance_word(words);
            stats.words_visited += 1;
            candidates = self.bitmap.load(self.hand.word());
        }

        let bit = candidates.trailing_zeros();
        let victim = self.hand.word() * WORD_BITS + bit as usize;
        self.hand.consume(bit, words);
        (victim, stats)
    }

    /// Removes `key`, keeping occupied slots contiguous.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_with_move(key).map(|(value, _)| value)
    }

    /// Removes `key`; the flag reports whether another entry was moved.
    pub(crate) fn remove_with_move(&mut self, key: &K) -> Option<(V, bool)> {
        let removed = self.table.swap_remove(key)?;
        match removed.moved_from {
            Some(from) => {
                // The moved entry keeps its own reference state.
                let ejectable = self.bitmap.is_set(from);
                self.bitmap.assign(removed.index, ejectable);
                self.bitmap.set_bit(from);
            }
            None => self.bitmap.set_bit(removed.index),
        }
        Some((removed.value, removed.moved_from.is_some()))
    }

    /// Iterates entries in slot order without touching ejectable bits.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.table.iter().map(|(_, slot)| (&slot.key, &slot.value))
    }

    fn entry_at(&self, idx: usize) -> Option<(&K, &V)> {
        if idx >= self.table.len() {
            return None;
        }
        self.table.get(idx).map(|slot| (&slot.key, &slot.value))
    }

    /// Validates the structural invariants of the table, bitmap and hand.
    pub fn check_invariants(&self) -> Result<(), InvariantError>
    where
        K: fmt::Debug,
    {
        let capacity = self.capacity();
        if capacity < MIN_CAPACITY || capacity % WORD_BITS != 0 {
            return Err(InvariantError::new(format!(
                "capacity {} is not a positive multiple of {}",
                capacity, WORD_BITS
            )));
        }
        if self.bitmap.bit_count() != capacity {
            return Err(InvariantError::new(format!(
                "bitmap covers {} slots, capacity is {}",
                self.bitmap.bit_count(),
                capacity
            )));
        }

        let len = self.len();
        if len > capacity {
            return Err(InvariantError::new(format!(
                "len {} exceeds capacity {}",
                len, capacity
            )));
        }
        if self.table.index_len() != len {
            return Err(InvariantError::new(format!(
                "index holds {} keys, len is {}",
                self.table.index_len(),
                len
            )));
        }

        for (key, idx) in self.table.index_entries() {
            if idx >= len {
                return Err(InvariantError::new(format!(
                    "key {:?} indexed at {} beyond len {}",
                    key, idx, len
                )));
            }
            match self.table.get(idx) {
                Some(slot) if slot.key == *key => {},
                Some(slot) => {
                    return Err(InvariantError::new(format!(
                        "key {:?} indexed at {} but slot holds {:?}",
                        key, idx, slot.key
                    )));
                },
                None => {
                    return Err(InvariantError::new(format!(
                        "key {:?} indexed at empty slot {}",
                        key, idx
                    )));
                },
            }
        }

        let mut occupied = 0;
        for (idx, slot) in self.table.iter() {
            if slot.keep != keep_mask(idx) {
                return Err(InvariantError::new(format!(
                    "slot {} has keep mask {:016x}, expected {:016x}",
                    idx,
                    slot.keep,
                    keep_mask(idx)
                )));
            }
            occupied += 1;
        }
        if occupied != len {
            return Err(InvariantError::new(format!(
                "{} occupied slots in [0, {}), expected no gaps",
                occupied, len
            )));
        }
        let stray = self.table.stray_tail_slots();
        if stray != 0 {
            return Err(InvariantError::new(format!(
                "{} slots beyond len {} still hold entries",
                stray, len
            )));
        }

        for idx in len..capacity {
            if !self.bitmap.is_set(idx) {
                return Err(InvariantError::new(format!(
                    "free slot {} is not marked ejectable",
                    idx
                )));
            }
        }

        if self.hand.word() >= self.bitmap.word_count() {
            return Err(InvariantError::new(format!(
                "hand word {} out of {} words",
                self.hand.word(),
                self.bitmap.word_count()
            )));
        }
        if !self.hand.is_well_formed() {
            return Err(InvariantError::new(format!(
                "hand mask {:016x} is not a run of high-order ones",
                self.hand.mask()
            )));
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self)
    where
        K: fmt::Debug,
    {
        if let Err(err) = self.check_invariants() {
            panic!("second-chance invariant violated: {}", err);
        }
    }

    #[cfg(any(test, debug_assertions))]
    /// Returns the slot index currently holding `key`.
    pub fn debug_slot_of(&self, key: &K) -> Option<usize> {
        self.table.lookup(key)
    }

    #[cfg(any(test, debug_assertions))]
    /// Returns `true` if slot `index` is marked ejectable.
    pub fn debug_is_ejectable(&self, index: usize) -> bool {
        self.bitmap.is_set(index)
    }

    #[cfg(any(test, debug_assertions))]
    /// Forces the ejectable bit of slot `index`.
    pub fn debug_set_ejectable(&self, index: usize, ejectable: bool) {
        self.bitmap.assign(index, ejectable);
    }

    #[cfg(any(test, debug_assertions))]
    /// Returns the hand position as `(word, mask)`.
    pub fn debug_hand(&self) -> (usize, u64) {
        (self.hand.word(), self.hand.mask())
    }
}

impl<K, V> fmt::Debug for SecondChanceCore<K, V>
where
    K: Eq + Hash + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecondChanceCore")
            .field("capacity", &self.capacity())
            .field("len", &self.len())
            .field("hand", &self.hand)
            .finish_non_exhaustive()
    }
}

/// Thread-safe second-chance cache.
///
/// Reads (`get`, `contains`, `peek_with`) share the lock; every structural
/// change is exclusive. Values are returned by clone, or borrowed inside a
/// closure via [`get_with`](Self::get_with).
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::thread;
///
/// use clockbits::policy::second_chance::SecondChanceCache;
///
/// let cache = Arc::new(SecondChanceCache::new(64));
/// cache.insert(1u64, "one".to_string());
///
/// let reader = {
///     let cache = cache.clone();
///     thread::spawn(move || cache.get_with(&1, |v| v.len()))
/// };
/// assert_eq!(reader.join().unwrap(), Some(3));
/// ```
pub struct SecondChanceCache<K, V> {
    core: RwLock<SecondChanceCore<K, V>>,
    #[cfg(feature = "metrics")]
    metrics: SecondChanceMetrics,
}

impl<K, V> SecondChanceCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache holding up to `capacity` entries, rounded up to a
    /// multiple of 64 (minimum 64).
    pub fn new(capacity: usize) -> Self {
        Self {
            core: RwLock::new(SecondChanceCore::new(capacity)),
            #[cfg(feature = "metrics")]
            metrics: SecondChanceMetrics::new(),
        }
    }

    /// Discards all entries and reallocates for `capacity`.
    pub fn init(&self, capacity: usize) {
        self.core.write().init(capacity);
        #[cfg(feature = "metrics")]
        self.metrics.record_reset();
    }

    /// Empties the cache, keeping its capacity and allocations.
    pub fn reset(&self) {
        self.core.write().reset();
        #[cfg(feature = "metrics")]
        self.metrics.record_reset();
    }

    pub fn capacity(&self) -> usize {
        self.core.read().capacity()
    }

    pub fn len(&self) -> usize {
        self.core.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.core.read().is_empty()
    }

    /// Returns `true` if `key` is cached. Never affects eviction order.
    pub fn contains(&self, key: &K) -> bool {
        self.core.read().contains(key)
    }

    /// Applies `f` to `key`'s value and grants the entry a second chance.
    pub fn get_with<R>(&self, key: &K, f: impl FnOnce(&V) -> R) -> Option<R> {
        let core = self.core.read();
        let result = core.get(key).map(f);
        #[cfg(feature = "metrics")]
        {
            if result.is_some() {
                self.metrics.record_get_hit();
            } else {
                self.metrics.record_get_miss();
            }
        }
        result
    }

    /// Returns a clone of `key`'s value and grants the entry a second chance.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.get_with(key, V::clone)
    }

    /// Applies `f` to `key`'s value without granting a second chance.
    pub fn peek_with<R>(&self, key: &K, f: impl FnOnce(&V) -> R) -> Option<R> {
        self.core.read().peek(key).map(f)
    }

    /// Inserts or replaces `key`, evicting an unreferenced entry when full.
    pub fn add(&self, key: K, value: V) -> AddOutcome<K, V> {
        let (outcome, stats) = self.core.write().add_with_stats(key, value);
        #[cfg(not(feature = "metrics"))]
        let _ = stats;
        #[cfg(feature = "metrics")]
        {
            match &outcome {
                AddOutcome::Inserted => self.metrics.record_insert_new(),
                AddOutcome::Replaced(_) => self.metrics.record_insert_update(),
                AddOutcome::Evicted { .. } => {
                    self.metrics.record_eviction();
                    self.metrics.record_sweep_words(stats.words_visited);
                    self.metrics
                        .record_second_chance_grants(stats.words_refilled);
                },
            }
        }
        outcome
    }

    /// Inserts or replaces `key`, returning whichever value was displaced.
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.add(key, value).into_prior()
    }

    /// Removes `key` and returns its value.
    pub fn remove(&self, key: &K) -> Option<V> {
        let removed = self.core.write().remove_with_move(key);
        #[cfg(feature = "metrics")]
        {
            match &removed {
                Some((_, moved)) => {
                    self.metrics.record_remove_hit();
                    if *moved {
                        self.metrics.record_compaction_move();
                    }
                },
                None => self.metrics.record_remove_miss(),
            }
        }
        removed.map(|(value, _)| value)
    }

    /// Iterates over a copy of each entry while holding the exclusive lock.
    ///
    /// The lock is released when the iterator is dropped, so stopping early
    /// frees the cache immediately. Order is unspecified.
    ///
    /// ```
    /// use clockbits::policy::second_chance::SecondChanceCache;
    ///
    /// let cache = SecondChanceCache::new(64);
    /// cache.insert(1, 10);
    /// cache.insert(2, 20);
    ///
    /// let mut pairs: Vec<_> = cache.items().collect();
    /// pairs.sort();
    /// assert_eq!(pairs, vec![(1, 10), (2, 20)]);
    /// ```
    pub fn items(&self) -> Items<'_, K, V> {
        Items {
            core: self.core.write(),
            next: 0,
        }
    }

    /// Validates the cache's internal invariants.
    pub fn check_invariants(&self) -> Result<(), InvariantError>
    where
        K: fmt::Debug,
    {
        self.core.read().check_invariants()
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self)
    where
        K: fmt::Debug,
    {
        self.core.read().debug_validate_invariants();
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_slot_of(&self, key: &K) -> Option<usize> {
        self.core.read().debug_slot_of(key)
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_is_ejectable(&self, index: usize) -> bool {
        self.core.read().debug_is_ejectable(index)
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_set_ejectable(&self, index: usize, ejectable: bool) {
        self.core.read().debug_set_ejectable(index, ejectable);
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_hand(&self) -> (usize, u64) {
        self.core.read().debug_hand()
    }
}

impl<K, V> fmt::Debug for SecondChanceCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let core = self.core.read();
        f.debug_struct("SecondChanceCache")
            .field("capacity", &core.capacity())
            .field("len", &core.len())
            .finish_non_exhaustive()
    }
}

/// Iterator returned by [`SecondChanceCache::items`].
///
/// Holds the cache's write guard; dropping it releases the lock.
pub struct Items<'a, K, V> {
    core: RwLockWriteGuard<'a, SecondChanceCore<K, V>>,
    next: usize,
}

impl<K, V> Iterator for Items<'_, K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let (key, value) = self.core.entry_at(self.next)?;
        let item = (key.clone(), value.clone());
        self.next += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.core.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl<K, V> ExactSizeIterator for Items<'_, K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
}

impl<K, V> FusedIterator for Items<'_, K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
}

impl<K, V> ConcurrentCache for SecondChanceCache<K, V>
where
    K: Send + Sync,
    V: Send + Sync,
{
}

impl<K, V> SharedCache<K, V> for SecondChanceCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Clone + Send + Sync,
{
    fn insert(&self, key: K, value: V) -> Option<V> {
        SecondChanceCache::insert(self, key, value)
    }

    fn get(&self, key: &K) -> Option<V> {
        SecondChanceCache::get(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        SecondChanceCache::contains(self, key)
    }

    fn remove(&self, key: &K) -> Option<V> {
        SecondChanceCache::remove(self, key)
    }

    fn len(&self) -> usize {
        SecondChanceCache::len(self)
    }

    fn capacity(&self) -> usize {
        SecondChanceCache::capacity(self)
    }

    fn clear(&self) {
        self.reset();
    }
}

#[cfg(feature = "metrics")]
impl<K, V> SecondChanceCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Returns a snapshot of cache metrics.
    pub fn metrics_snapshot(&self) -> SecondChanceMetricsSnapshot {
        let (len, capacity) = {
            let core = self.core.read();
            (core.len(), core.capacity())
        };
        self.metrics.snapshot(len, capacity)
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsSnapshotProvider<SecondChanceMetricsSnapshot> for SecondChanceCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn snapshot(&self) -> SecondChanceMetricsSnapshot {
        self.metrics_snapshot()
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsReset for SecondChanceCache<K, V> {
    fn reset_metrics(&self) {
        self.metrics.reset_metrics();
    }
}
