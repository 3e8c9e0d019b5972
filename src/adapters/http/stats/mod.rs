//! HTTP adapter for statistics endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{StatsParams, StatsResponse};
pub use handlers::StatsHandlers;
pub use routes::stats_routes;
