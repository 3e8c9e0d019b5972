//! HTTP routes for statistics endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_overview, StatsHandlers};

/// Creates the stats router, mounted at `/api/stats`.
pub fn stats_routes(handlers: StatsHandlers) -> Router {
    Router::new()
        .route("/", get(get_overview))
        .with_state(handlers)
}
