//! Statistics reader port (read-only reporting).

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::stats::{EventPerformance, HourlyCount, StatsQuery};

/// Read-side port joining visit logs, coupon records, and events into
/// per-event and per-hour counts.
#[async_trait]
pub trait StatsReader: Send + Sync {
    /// Per-event totals for the query window.
    async fn event_counts(&self, query: &StatsQuery) -> Result<Vec<EventPerformance>, DomainError>;

    /// Per-hour buckets for the query window, oldest first.
    async fn hourly_counts(&self, query: &StatsQuery) -> Result<Vec<HourlyCount>, DomainError>;
}
