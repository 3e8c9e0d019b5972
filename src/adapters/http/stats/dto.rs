//! HTTP DTOs for statistics endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::stats::StatsOverview;

/// Query parameters for the overview.
#[derive(Debug, Clone, Deserialize)]
pub struct StatsParams {
    /// Restrict to a single event.
    pub event_id: Option<String>,
    /// Inclusive lower bound.
    pub from: Option<DateTime<Utc>>,
    /// Exclusive upper bound.
    pub until: Option<DateTime<Utc>>,
}

/// Response wrapping the overview.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub success: bool,
    #[serde(flatten)]
    pub overview: StatsOverview,
}
