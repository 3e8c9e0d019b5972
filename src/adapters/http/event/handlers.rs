//! HTTP handlers for event endpoints.

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::error_response;
use crate::adapters::http::middleware::{OptionalAuth, RequireAuth};
use crate::application::handlers::event::{
    CreateEventCommand, CreateEventHandler, DeleteEventCommand, DeleteEventHandler, GetEventHandler,
    GetEventQuery, GetPublicEventHandler, GetPublicEventQuery, ListEventsHandler, ListEventsQuery,
    TrackVisitCommand, TrackVisitHandler, UpdateEventCommand, UpdateEventHandler,
};
use crate::domain::foundation::EventId;

use super::dto::{
    AckResponse, CreateEventRequest, EventDetailResponse, EventDto, ListEventsResponse,
    UpdateEventRequest,
};

#[derive(Clone)]
pub struct EventHandlers {
    create: Arc<CreateEventHandler>,
    get: Arc<GetEventHandler>,
    get_public: Arc<GetPublicEventHandler>,
    update: Arc<UpdateEventHandler>,
    delete: Arc<DeleteEventHandler>,
    list: Arc<ListEventsHandler>,
    track_visit: Arc<TrackVisitHandler>,
}

impl EventHandlers {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        create: Arc<CreateEventHandler>,
        get: Arc<GetEventHandler>,
        get_public: Arc<GetPublicEventHandler>,
        update: Arc<UpdateEventHandler>,
        delete: Arc<DeleteEventHandler>,
        list: Arc<ListEventsHandler>,
        track_visit: Arc<TrackVisitHandler>,
    ) -> Self {
        Self {
            create,
            get,
            get_public,
            update,
            delete,
            list,
            track_visit,
        }
    }
}

/// POST /api/events - create an event with its landing pages.
pub async fn create_event(
    State(handlers): State<EventHandlers>,
    RequireAuth(account): RequireAuth,
    Json(req): Json<CreateEventRequest>,
) -> Response {
    let cmd = CreateEventCommand {
        owner_id: account.user_id,
        name: req.name,
        domain_code: req.domain_code,
        editor: req.editor,
    };

    match handlers.create.handle(cmd).await {
        Ok(created) => (StatusCode::CREATED, Json(EventDetailResponse::from(&created)))
            .into_response(),
        Err(e) => error_response(e),
    }
}

/// GET /api/events - list the account's events, newest first.
pub async fn list_events(
    State(handlers): State<EventHandlers>,
    RequireAuth(account): RequireAuth,
) -> Response {
    let query = ListEventsQuery {
        owner_id: account.user_id,
    };

    match handlers.list.handle(query).await {
        Ok(events) => (
            StatusCode::OK,
            Json(ListEventsResponse {
                success: true,
                events: events.iter().map(EventDto::from).collect(),
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

/// GET /api/events/{key} - owner read by id, or public read by domain code.
///
/// A key that parses as a UUID is an owner-scoped lookup and requires
/// authentication; anything else is treated as a domain code and only finds
/// published events.
pub async fn get_event(
    State(handlers): State<EventHandlers>,
    OptionalAuth(account): OptionalAuth,
    Path(key): Path<String>,
) -> Response {
    match EventId::from_str(&key) {
        Ok(event_id) => {
            let Some(account) = account else {
                return crate::adapters::http::middleware::AuthRejection::Unauthenticated
                    .into_response();
            };
            let query = GetEventQuery {
                event_id,
                owner_id: account.user_id,
            };
            match handlers.get.handle(query).await {
                Ok(found) => {
                    (StatusCode::OK, Json(EventDetailResponse::from(&found))).into_response()
                }
                Err(e) => error_response(e),
            }
        }
        Err(_) => {
            let query = GetPublicEventQuery { domain_code: key };
            match handlers.get_public.handle(query).await {
                Ok(found) => {
                    (StatusCode::OK, Json(EventDetailResponse::from(&found))).into_response()
                }
                Err(e) => error_response(e),
            }
        }
    }
}

/// PUT /api/events/{id} - partial update; editor replaces all pages.
pub async fn update_event(
    State(handlers): State<EventHandlers>,
    RequireAuth(account): RequireAuth,
    Path(event_id): Path<EventId>,
    Json(req): Json<UpdateEventRequest>,
) -> Response {
    let cmd = UpdateEventCommand {
        event_id,
        owner_id: account.user_id,
        name: req.name,
        domain_code: req.domain_code,
        is_published: req.is_published,
        editor: req.editor,
    };

    match handlers.update.handle(cmd).await {
        Ok(updated) => (StatusCode::OK, Json(EventDetailResponse::from(&updated))).into_response(),
        Err(e) => error_response(e),
    }
}

/// DELETE /api/events/{id} - delete the event; pages and visits cascade.
pub async fn delete_event(
    State(handlers): State<EventHandlers>,
    RequireAuth(account): RequireAuth,
    Path(event_id): Path<EventId>,
) -> Response {
    let cmd = DeleteEventCommand {
        event_id,
        owner_id: account.user_id,
    };

    match handlers.delete.handle(cmd).await {
        Ok(()) => (StatusCode::OK, Json(AckResponse { success: true })).into_response(),
        Err(e) => error_response(e),
    }
}

/// POST /api/events/{domain_code}/track-visit - best-effort visit logging.
pub async fn track_visit(
    State(handlers): State<EventHandlers>,
    Path(domain_code): Path<String>,
) -> Response {
    let cmd = TrackVisitCommand { domain_code };

    match handlers.track_visit.handle(cmd).await {
        Ok(()) => (StatusCode::OK, Json(AckResponse { success: true })).into_response(),
        Err(e) => error_response(e),
    }
}
