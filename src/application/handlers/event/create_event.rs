//! CreateEventHandler - Command handler for creating an event with its pages.

use std::sync::Arc;

use crate::domain::event::{converter, EditorState, Event};
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::{EventRepository, EventWithPages};

/// Command to create an event.
#[derive(Debug, Clone)]
pub struct CreateEventCommand {
    pub owner_id: UserId,
    pub name: String,
    pub domain_code: String,
    /// Editor state of the landing pages; padded to five slots on save.
    pub editor: EditorState,
}

/// Handler for event creation.
pub struct CreateEventHandler {
    events: Arc<dyn EventRepository>,
}

impl CreateEventHandler {
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }

    pub async fn handle(&self, cmd: CreateEventCommand) -> Result<EventWithPages, DomainError> {
        let event = Event::create(cmd.owner_id, cmd.name, cmd.domain_code)
            .map_err(|e| DomainError::validation("event", e.to_string()))?;

        let pages = converter::to_records(&cmd.editor);
        self.events.insert(&event, &pages).await?;

        Ok(EventWithPages { event, pages })
    }
}
