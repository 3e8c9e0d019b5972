//! HTTP routes for event endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_event, delete_event, get_event, list_events, track_visit, update_event, EventHandlers,
};

/// Creates the event router, mounted at `/api/events`.
///
/// `GET /:key` serves both the owner read (UUID key) and the public
/// landing-page read (domain-code key); the handler disambiguates.
pub fn event_routes(handlers: EventHandlers) -> Router {
    Router::new()
        .route("/", post(create_event).get(list_events))
        .route(
            "/:key",
            get(get_event).put(update_event).delete(delete_event),
        )
        .route("/:domain_code/track-visit", post(track_visit))
        .with_state(handlers)
}
