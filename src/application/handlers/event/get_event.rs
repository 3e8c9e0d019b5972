//! GetEventHandler - owner-scoped event read.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, EventId, UserId};
use crate::ports::{EventRepository, EventWithPages};

/// Query for one of the caller's events.
#[derive(Debug, Clone)]
pub struct GetEventQuery {
    pub event_id: EventId,
    pub owner_id: UserId,
}

/// Handler for owner-scoped event reads.
pub struct GetEventHandler {
    events: Arc<dyn EventRepository>,
}

impl GetEventHandler {
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }

    pub async fn handle(&self, query: GetEventQuery) -> Result<EventWithPages, DomainError> {
        let found = self.events.find_by_id(&query.event_id).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::EventNotFound,
                format!("Event {} not found", query.event_id),
            )
        })?;

        if found.event.owner_id != query.owner_id {
            return Err(DomainError::new(
                ErrorCode::Forbidden,
                "Event belongs to another account",
            ));
        }

        Ok(found)
    }
}
