//! GetPublicEventHandler - public landing-page read by domain code.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{EventRepository, EventWithPages};

/// Query by public domain code; only published events resolve.
#[derive(Debug, Clone)]
pub struct GetPublicEventQuery {
    pub domain_code: String,
}

/// Handler for the public landing-page renderer.
pub struct GetPublicEventHandler {
    events: Arc<dyn EventRepository>,
}

impl GetPublicEventHandler {
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }

    pub async fn handle(&self, query: GetPublicEventQuery) -> Result<EventWithPages, DomainError> {
        self.events
            .find_published_by_domain_code(&query.domain_code)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::EventNotFound,
                    format!("No published event under '{}'", query.domain_code),
                )
            })
    }
}
