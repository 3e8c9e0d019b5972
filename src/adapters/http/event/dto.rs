//! HTTP DTOs for event endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::event::{converter, EditorState, Event};
use crate::ports::EventWithPages;

/// Request to create an event.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEventRequest {
    pub name: String,
    pub domain_code: String,
    /// Landing pages in editor shape; missing slots are padded on save.
    #[serde(default)]
    pub editor: EditorState,
}

/// Request to update an event. Absent fields are left untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEventRequest {
    pub name: Option<String>,
    pub domain_code: Option<String>,
    pub is_published: Option<bool>,
    pub editor: Option<EditorState>,
}

/// An event without its page payload.
#[derive(Debug, Clone, Serialize)]
pub struct EventDto {
    pub id: String,
    pub name: String,
    pub domain_code: String,
    pub is_published: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Event> for EventDto {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.to_string(),
            name: event.name.clone(),
            domain_code: event.domain_code.clone(),
            is_published: event.is_published,
            created_at: event.created_at.as_datetime().to_rfc3339(),
            updated_at: event.updated_at.as_datetime().to_rfc3339(),
        }
    }
}

/// An event with its landing pages back in editor shape.
#[derive(Debug, Serialize)]
pub struct EventDetailResponse {
    pub success: bool,
    pub event: EventDto,
    pub editor: EditorState,
}

impl From<&EventWithPages> for EventDetailResponse {
    fn from(found: &EventWithPages) -> Self {
        Self {
            success: true,
            event: EventDto::from(&found.event),
            editor: converter::to_editor(&found.pages),
        }
    }
}

/// Response for the event list.
#[derive(Debug, Serialize)]
pub struct ListEventsResponse {
    pub success: bool,
    pub events: Vec<EventDto>,
}

/// Minimal acknowledgement envelope.
#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub success: bool,
}
