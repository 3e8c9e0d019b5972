//! Visit log port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventId, Timestamp};

/// Append-only page-visit log.
///
/// Recording is best-effort: callers log and swallow failures rather than
/// failing the page view that triggered them.
#[async_trait]
pub trait VisitLog: Send + Sync {
    /// Appends one visit for the event.
    async fn record(&self, event_id: &EventId, at: Timestamp) -> Result<(), DomainError>;
}
