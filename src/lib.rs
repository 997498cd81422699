//! clockbits: a fixed-capacity concurrent cache with bitmap-driven
//! second-chance (clock) eviction.
//!
//! Hits are served under a shared lock and record the access with one atomic
//! bit clear; inserts, removals and iteration take the lock exclusively.
//! See [`policy::second_chance`] for the algorithm and invariants.

pub mod ds;
pub mod error;
pub mod policy;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
pub mod traits;
