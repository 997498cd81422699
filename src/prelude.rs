pub use crate::error::InvariantError;
pub use crate::policy::second_chance::{AddOutcome, Items, SecondChanceCache, SecondChanceCore};
pub use crate::traits::{ConcurrentCache, SharedCache};

#[cfg(feature = "metrics")]
pub use crate::metrics::exporter::PrometheusTextExporter;
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::SecondChanceMetricsSnapshot;
#[cfg(feature = "metrics")]
pub use crate::metrics::traits::{MetricsExporter, MetricsReset, MetricsSnapshotProvider};
