//! In-Memory Event Repository Adapter

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::event::{Event, PageRecord};
use crate::domain::foundation::{DomainError, ErrorCode, EventId, Timestamp, UserId};
use crate::ports::{EventRepository, EventWithPages, VisitLog};

/// In-memory storage for events, pages, and visit logs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventRepository {
    events: Arc<RwLock<HashMap<EventId, EventWithPages>>>,
    visits: Arc<RwLock<Vec<(EventId, Timestamp)>>>,
}

impl InMemoryEventRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of visits recorded for an event.
    pub async fn visit_count(&self, event_id: &EventId) -> usize {
        self.visits
            .read()
            .await
            .iter()
            .filter(|(id, _)| id == event_id)
            .count()
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn insert(&self, event: &Event, pages: &[PageRecord]) -> Result<(), DomainError> {
        self.events.write().await.insert(
            event.id,
            EventWithPages {
                event: event.clone(),
                pages: pages.to_vec(),
            },
        );
        Ok(())
    }

    async fn find_by_id(&self, id: &EventId) -> Result<Option<EventWithPages>, DomainError> {
        Ok(self.events.read().await.get(id).cloned())
    }

    async fn find_published_by_domain_code(
        &self,
        domain_code: &str,
    ) -> Result<Option<EventWithPages>, DomainError> {
        Ok(self
            .events
            .read()
            .await
            .values()
            .find(|e| e.event.is_published && e.event.domain_code == domain_code)
            .cloned())
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Event>, DomainError> {
        let mut events: Vec<Event> = self
            .events
            .read()
            .await
            .values()
            .filter(|e| e.event.owner_id == *owner_id)
            .map(|e| e.event.clone())
            .collect();
        events.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(events)
    }

    async fn update(&self, event: &Event, pages: &[PageRecord]) -> Result<(), DomainError> {
        let mut events = self.events.write().await;
        if !events.contains_key(&event.id) {
            return Err(DomainError::new(
                ErrorCode::EventNotFound,
                format!("Event {} not found", event.id),
            ));
        }
        events.insert(
            event.id,
            EventWithPages {
                event: event.clone(),
                pages: pages.to_vec(),
            },
        );
        Ok(())
    }

    async fn delete(&self, id: &EventId) -> Result<(), DomainError> {
        self.events.write().await.remove(id);
        self.visits.write().await.retain(|(event_id, _)| event_id != id);
        Ok(())
    }
}

#[async_trait]
impl VisitLog for InMemoryEventRepository {
    async fn record(&self, event_id: &EventId, at: Timestamp) -> Result<(), DomainError> {
        self.visits.write().await.push((*event_id, at));
        Ok(())
    }
}
