//! Event handlers: CRUD, the public landing read, and visit tracking.

mod create_event;
mod delete_event;
mod get_event;
mod get_public_event;
mod list_events;
mod track_visit;
mod update_event;

pub use create_event::{CreateEventCommand, CreateEventHandler};
pub use delete_event::{DeleteEventCommand, DeleteEventHandler};
pub use get_event::{GetEventHandler, GetEventQuery};
pub use get_public_event::{GetPublicEventHandler, GetPublicEventQuery};
pub use list_events::{ListEventsHandler, ListEventsQuery};
pub use track_visit::{TrackVisitCommand, TrackVisitHandler};
pub use update_event::{UpdateEventCommand, UpdateEventHandler};
