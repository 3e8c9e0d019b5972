//! TrackVisitHandler - fire-and-forget visit logging.
//!
//! A failed insert must never break the page view that triggered it, so
//! logging failures are demoted to warnings. Only an unknown domain code is
//! surfaced, since that points at a caller bug rather than a flaky backend.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
use crate::ports::{EventRepository, VisitLog};

/// Command to record one landing-page visit.
#[derive(Debug, Clone)]
pub struct TrackVisitCommand {
    pub domain_code: String,
}

/// Handler for visit tracking.
pub struct TrackVisitHandler {
    events: Arc<dyn EventRepository>,
    visits: Arc<dyn VisitLog>,
}

impl TrackVisitHandler {
    pub fn new(events: Arc<dyn EventRepository>, visits: Arc<dyn VisitLog>) -> Self {
        Self { events, visits }
    }

    pub async fn handle(&self, cmd: TrackVisitCommand) -> Result<(), DomainError> {
        let found = self
            .events
            .find_published_by_domain_code(&cmd.domain_code)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::EventNotFound,
                    format!("No published event under '{}'", cmd.domain_code),
                )
            })?;

        if let Err(err) = self.visits.record(&found.event.id, Timestamp::now()).await {
            tracing::warn!(
                event_id = %found.event.id,
                error = %err,
                "visit tracking failed, dropping the visit"
            );
        }
        Ok(())
    }
}
