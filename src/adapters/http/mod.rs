//! HTTP adapters - the REST surface over the application handlers.
//!
//! Each area carries its own handlers/routes/dto triple; this module glues
//! them into the full `/api` router.

pub mod auth;
pub mod coupon;
pub mod error;
pub mod event;
pub mod middleware;
pub mod stats;
pub mod upload;

use std::time::Duration;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

pub use auth::{auth_routes, AuthHandlers};
pub use coupon::{coupon_routes, CouponHandlers};
pub use event::{event_routes, EventHandlers};
pub use middleware::{auth_middleware, AuthState, OptionalAuth, RequireAuth};
pub use stats::{stats_routes, StatsHandlers};
pub use upload::{upload_routes, UploadHandlers};

/// Assembles the full API router.
///
/// The auth middleware runs for every route; it validates Bearer tokens when
/// present and leaves enforcement to each handler's extractor.
pub fn api_router(
    auth_state: AuthState,
    coupon_handlers: CouponHandlers,
    event_handlers: EventHandlers,
    stats_handlers: StatsHandlers,
    auth_handlers: AuthHandlers,
    upload_handlers: UploadHandlers,
    cors_origins: &[String],
    request_timeout: Duration,
) -> Router {
    Router::new()
        .nest("/api/coupons", coupon_routes(coupon_handlers))
        .nest("/api/events", event_routes(event_handlers))
        .nest("/api/stats", stats_routes(stats_handlers))
        .nest("/api", auth_routes(auth_handlers))
        .nest("/api", upload_routes(upload_handlers))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            auth_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(cors_layer(cors_origins))
}

/// Builds the CORS layer. With no configured origins any origin is allowed,
/// which suits local development; deployments list their landing-page hosts.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin, "ignoring unparseable CORS origin");
                None
            }
        })
        .collect();
    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods(Any)
        .allow_headers(Any)
}
