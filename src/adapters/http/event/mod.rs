//! HTTP adapter for event endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AckResponse, CreateEventRequest, EventDetailResponse, EventDto, ListEventsResponse,
    UpdateEventRequest,
};
pub use handlers::EventHandlers;
pub use routes::event_routes;
