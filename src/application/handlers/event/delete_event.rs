//! DeleteEventHandler - owner-scoped event deletion.
//!
//! Page records and visit logs cascade with the event. Coupons are owned by
//! the location, not the event, and are untouched.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, EventId, UserId};
use crate::ports::EventRepository;

/// Command to delete an event.
#[derive(Debug, Clone)]
pub struct DeleteEventCommand {
    pub event_id: EventId,
    pub owner_id: UserId,
}

/// Handler for event deletion.
pub struct DeleteEventHandler {
    events: Arc<dyn EventRepository>,
}

impl DeleteEventHandler {
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }

    pub async fn handle(&self, cmd: DeleteEventCommand) -> Result<(), DomainError> {
        let found = self.events.find_by_id(&cmd.event_id).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::EventNotFound,
                format!("Event {} not found", cmd.event_id),
            )
        })?;

        if found.event.owner_id != cmd.owner_id {
            return Err(DomainError::new(
                ErrorCode::Forbidden,
                "Event belongs to another account",
            ));
        }

        self.events.delete(&cmd.event_id).await
    }
}
