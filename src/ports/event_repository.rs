//! Event repository port.

use async_trait::async_trait;

use crate::domain::event::{Event, PageRecord};
use crate::domain::foundation::{DomainError, EventId, UserId};

/// An event together with its persisted landing pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventWithPages {
    pub event: Event,
    pub pages: Vec<PageRecord>,
}

/// Persistence port for events and their landing pages.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Inserts a new event with its five page records.
    async fn insert(&self, event: &Event, pages: &[PageRecord]) -> Result<(), DomainError>;

    /// Loads an event by id, regardless of publication state.
    async fn find_by_id(&self, id: &EventId) -> Result<Option<EventWithPages>, DomainError>;

    /// Loads a *published* event by its domain code, for the public
    /// landing-page renderer.
    async fn find_published_by_domain_code(
        &self,
        domain_code: &str,
    ) -> Result<Option<EventWithPages>, DomainError>;

    /// Lists an account's events, newest first, without page payloads.
    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Event>, DomainError>;

    /// Replaces an event's fields and its page records.
    ///
    /// # Errors
    ///
    /// - `EventNotFound` if the event does not exist
    async fn update(&self, event: &Event, pages: &[PageRecord]) -> Result<(), DomainError>;

    /// Deletes an event; page records and visit logs cascade.
    async fn delete(&self, id: &EventId) -> Result<(), DomainError>;
}
