//! # Shared Cache Traits
//!
//! Traits for caches that synchronize internally and therefore expose every
//! operation through `&self`.
//!
//! ## Architecture
//!
//! ```text
//!   ┌─────────────────────────────────────────┐
//!   │        ConcurrentCache: Send + Sync     │  marker
//!   └──────────────────┬──────────────────────┘
//!                      │
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │           SharedCache<K, V>             │
//!   │                                         │
//!   │  insert(&, K, V) → Option<V>            │
//!   │  get(&, &K) → Option<V>                 │
//!   │  contains(&, &K) → bool                 │
//!   │  remove(&, &K) → Option<V>              │
//!   │  len(&) → usize                         │
//!   │  is_empty(&) → bool                     │
//!   │  capacity(&) → usize                    │
//!   │  clear(&)                               │
//!   └─────────────────────────────────────────┘
//! ```
//!
//! `get` returns an owned value: a reference could not outlive the internal
//! read guard. Implementations that can lend values expose a closure-based
//! accessor alongside (e.g. [`SecondChanceCache::get_with`](crate::policy::second_chance::SecondChanceCache::get_with)).
//!
//! ## Example Usage
//!
//! ```
//! use std::sync::Arc;
//!
//! use clockbits::policy::second_chance::SecondChanceCache;
//! use clockbits::traits::SharedCache;
//!
//! fn warm<C: SharedCache<u64, String>>(cache: &C, data: &[(u64, &str)]) {
//!     for (key, value) in data {
//!         cache.insert(*key, value.to_string());
//!     }
//! }
//!
//! let cache = Arc::new(SecondChanceCache::new(64));
//! warm(cache.as_ref(), &[(1, "one"), (2, "two")]);
//! assert_eq!(SharedCache::len(cache.as_ref()), 2);
//! ```

/// Marker trait for caches that are safe to share between threads.
pub trait ConcurrentCache: Send + Sync {}

/// Cache operations available through a shared reference.
pub trait SharedCache<K, V>: ConcurrentCache {
    /// Inserts a key-value pair, returning the value it displaced, if any.
    ///
    /// The displaced value is either the key's previous value or the value
    /// of an entry evicted to make room.
    fn insert(&self, key: K, value: V) -> Option<V>;

    /// Returns a copy of the value for `key`, recording the access.
    fn get(&self, key: &K) -> Option<V>;

    /// Returns `true` if `key` is cached, without recording an access.
    fn contains(&self, key: &K) -> bool;

    /// Removes `key` and returns its value.
    fn remove(&self, key: &K) -> Option<V>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn capacity(&self) -> usize;

    /// Removes every entry; capacity is unchanged.
    fn clear(&self);
}
