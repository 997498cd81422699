//! Error types for the clockbits library.
//!
//! Cache operations themselves are infallible: a missing key is an ordinary
//! `None`. The only error is [`InvariantError`], reported by
//! `check_invariants` when the internal structures disagree.
//!
//! ## Example Usage
//!
//! ```
//! use clockbits::policy::second_chance::SecondChanceCache;
//!
//! let cache = SecondChanceCache::new(64);
//! cache.insert("a", 1);
//! assert!(cache.check_invariants().is_ok());
//! ```

use std::fmt;

/// Error returned when internal cache invariants are violated.
///
/// Produced by
/// [`SecondChanceCore::check_invariants`](crate::policy::second_chance::SecondChanceCore::check_invariants).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}
