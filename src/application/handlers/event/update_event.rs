//! UpdateEventHandler - owner-scoped event update.

use std::sync::Arc;

use crate::domain::event::{converter, validate_domain_code, EditorState};
use crate::domain::foundation::{DomainError, ErrorCode, EventId, Timestamp, UserId};
use crate::ports::{EventRepository, EventWithPages};

/// Command to update an event. Absent fields are left untouched.
#[derive(Debug, Clone)]
pub struct UpdateEventCommand {
    pub event_id: EventId,
    pub owner_id: UserId,
    pub name: Option<String>,
    pub domain_code: Option<String>,
    pub is_published: Option<bool>,
    /// Replaces all page records when present.
    pub editor: Option<EditorState>,
}

/// Handler for event updates.
pub struct UpdateEventHandler {
    events: Arc<dyn EventRepository>,
}

impl UpdateEventHandler {
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }

    pub async fn handle(&self, cmd: UpdateEventCommand) -> Result<EventWithPages, DomainError> {
        let mut found = self.events.find_by_id(&cmd.event_id).await?.ok_or_else(|| {
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

        if let Some(name) = cmd.name {
            if name.trim().is_empty() {
                return Err(DomainError::validation("name", "Name cannot be empty"));
            }
            found.event.name = name;
        }
        if let Some(domain_code) = cmd.domain_code {
            validate_domain_code(&domain_code)
                .map_err(|e| DomainError::validation("domain_code", e.to_string()))?;
            found.event.domain_code = domain_code;
        }
        if let Some(is_published) = cmd.is_published {
            found.event.is_published = is_published;
        }
        if let Some(editor) = cmd.editor {
            found.pages = converter::to_records(&editor);
        }
        found.event.updated_at = Timestamp::now();

        self.events.update(&found.event, &found.pages).await?;
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryEventRepository;
    use crate::domain::event::Event;

    fn cmd(event_id: EventId, owner_id: UserId) -> UpdateEventCommand {
        UpdateEventCommand {
            event_id,
            owner_id,
            name: None,
            domain_code: None,
            is_published: None,
            editor: None,
        }
    }

    #[tokio::test]
    async fn publishing_flips_the_flag_and_keeps_pages() {
        let repo = Arc::new(InMemoryEventRepository::new());
        let owner = UserId::new();
        let event = Event::create(owner, "Launch", "shop1").unwrap();
        let pages = converter::to_records(&EditorState::default());
        repo.insert(&event, &pages).await.unwrap();

        let handler = UpdateEventHandler::new(repo.clone());
        let updated = handler
            .handle(UpdateEventCommand {
                is_published: Some(true),
                ..cmd(event.id, owner)
            })
            .await
            .unwrap();

        assert!(updated.event.is_published);
        assert_eq!(updated.pages.len(), pages.len());
    }

    #[tokio::test]
    async fn foreign_owners_cannot_update() {
        let repo = Arc::new(InMemoryEventRepository::new());
        let event = Event::create(UserId::new(), "Launch", "shop1").unwrap();
        repo.insert(&event, &[]).await.unwrap();

        let handler = UpdateEventHandler::new(repo);
        let err = handler
            .handle(cmd(event.id, UserId::new()))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }
}
