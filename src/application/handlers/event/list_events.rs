//! ListEventsHandler - the caller's events, newest first.

use std::sync::Arc;

use crate::domain::event::Event;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::EventRepository;

/// Query for the caller's events.
#[derive(Debug, Clone)]
pub struct ListEventsQuery {
    pub owner_id: UserId,
}

/// Handler for listing events.
pub struct ListEventsHandler {
    events: Arc<dyn EventRepository>,
}

impl ListEventsHandler {
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }

    pub async fn handle(&self, query: ListEventsQuery) -> Result<Vec<Event>, DomainError> {
        self.events.list_by_owner(&query.owner_id).await
    }
}
