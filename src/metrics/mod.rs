//! Feature-gated metrics for the second-chance cache.
//!
//! Enabled with the `metrics` cargo feature. Recording happens on every
//! operation, including the shared-lock read path, so every counter is an
//! atomic updated with `Relaxed` ordering.

pub mod cell;
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;
