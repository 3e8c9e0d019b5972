//! HTTP handlers for statistics endpoints.

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::error_response;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::stats::GetStatsOverviewHandler;
use crate::domain::foundation::{DomainError, EventId, Timestamp};
use crate::domain::stats::StatsQuery;

use super::dto::{StatsParams, StatsResponse};

#[derive(Clone)]
pub struct StatsHandlers {
    overview: Arc<GetStatsOverviewHandler>,
}

impl StatsHandlers {
    pub fn new(overview: Arc<GetStatsOverviewHandler>) -> Self {
        Self { overview }
    }
}

/// GET /api/stats - per-event and per-hour counts for the account.
pub async fn get_overview(
    State(handlers): State<StatsHandlers>,
    RequireAuth(account): RequireAuth,
    Query(params): Query<StatsParams>,
) -> Response {
    let event_id = match params.event_id.as_deref().map(EventId::from_str) {
        Some(Ok(id)) => Some(id),
        Some(Err(_)) => {
            return error_response(DomainError::validation("event_id", "Malformed event id"))
        }
        None => None,
    };

    let query = StatsQuery {
        owner_id: account.user_id,
        event_id,
        from: params.from.map(Timestamp::from_datetime),
        until: params.until.map(Timestamp::from_datetime),
    };

    match handlers.overview.handle(query).await {
        Ok(overview) => (
            StatusCode::OK,
            Json(StatsResponse {
                success: true,
                overview,
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}
