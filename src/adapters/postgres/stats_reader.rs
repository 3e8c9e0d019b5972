//! PostgreSQL implementation of the StatsReader port.
//!
//! Coupons hang off locations, and an event's `domain_code` doubles as its
//! location slug, so issuance/usage counts join through that slug.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, EventId, Timestamp};
use crate::domain::stats::{EventPerformance, HourlyCount, StatsQuery};
use crate::ports::StatsReader;

pub struct PostgresStatsReader {
    pool: PgPool,
}

impl PostgresStatsReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct EventCountRow {
    event_id: Uuid,
    event_name: String,
    domain_code: String,
    visits: i64,
    coupons_issued: i64,
    coupons_used: i64,
}

impl From<EventCountRow> for EventPerformance {
    fn from(row: EventCountRow) -> Self {
        EventPerformance {
            event_id: EventId::from_uuid(row.event_id),
            event_name: row.event_name,
            domain_code: row.domain_code,
            visits: row.visits,
            coupons_issued: row.coupons_issued,
            coupons_used: row.coupons_used,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct HourlyCountRow {
    hour: DateTime<Utc>,
    visits: i64,
    coupons_issued: i64,
    coupons_used: i64,
}

impl From<HourlyCountRow> for HourlyCount {
    fn from(row: HourlyCountRow) -> Self {
        HourlyCount {
            hour: Timestamp::from_datetime(row.hour),
            visits: row.visits,
            coupons_issued: row.coupons_issued,
            coupons_used: row.coupons_used,
        }
    }
}

fn window_bounds(query: &StatsQuery) -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
    (
        query.from.as_ref().map(|t| *t.as_datetime()),
        query.until.as_ref().map(|t| *t.as_datetime()),
    )
}

#[async_trait]
impl StatsReader for PostgresStatsReader {
    async fn event_counts(&self, query: &StatsQuery) -> Result<Vec<EventPerformance>, DomainError> {
        let (from, until) = window_bounds(query);
        let rows: Vec<EventCountRow> = sqlx::query_as(
            r#"
            SELECT
                e.id AS event_id,
                e.name AS event_name,
                e.domain_code,
                (SELECT COUNT(*) FROM visits v
                 WHERE v.event_id = e.id
                   AND ($3::timestamptz IS NULL OR v.visited_at >= $3)
                   AND ($4::timestamptz IS NULL OR v.visited_at < $4)) AS visits,
                (SELECT COUNT(*) FROM coupons c
                 JOIN locations l ON l.id = c.location_id
                 WHERE l.slug = e.domain_code
                   AND ($3::timestamptz IS NULL OR c.created_at >= $3)
                   AND ($4::timestamptz IS NULL OR c.created_at < $4)) AS coupons_issued,
                (SELECT COUNT(*) FROM coupons c
                 JOIN locations l ON l.id = c.location_id
                 WHERE l.slug = e.domain_code
                   AND c.is_used = TRUE
                   AND ($3::timestamptz IS NULL OR c.used_at >= $3)
                   AND ($4::timestamptz IS NULL OR c.used_at < $4)) AS coupons_used
            FROM events e
            WHERE e.owner_id = $1
              AND ($2::uuid IS NULL OR e.id = $2)
            ORDER BY e.created_at DESC
            "#,
        )
        .bind(query.owner_id.as_uuid())
        .bind(query.event_id.as_ref().map(|id| *id.as_uuid()))
        .bind(from)
        .bind(until)
        .fetch_all(&self.pool)
        .await
        .map_err(DomainError::database)?;

        Ok(rows.into_iter().map(EventPerformance::from).collect())
    }

    async fn hourly_counts(&self, query: &StatsQuery) -> Result<Vec<HourlyCount>, DomainError> {
        let (from, until) = window_bounds(query);
        let rows: Vec<HourlyCountRow> = sqlx::query_as(
            r#"
            WITH owned AS (
                SELECT e.id, e.domain_code
                FROM events e
                WHERE e.owner_id = $1
                  AND ($2::uuid IS NULL OR e.id = $2)
            ),
            buckets AS (
                SELECT date_trunc('hour', v.visited_at) AS hour,
                       COUNT(*) AS visits,
                       0::bigint AS coupons_issued,
                       0::bigint AS coupons_used
                FROM visits v
                JOIN owned o ON o.id = v.event_id
                WHERE ($3::timestamptz IS NULL OR v.visited_at >= $3)
                  AND ($4::timestamptz IS NULL OR v.visited_at < $4)
                GROUP BY 1
                UNION ALL
                SELECT date_trunc('hour', c.created_at),
                       0::bigint,
                       COUNT(*),
                       0::bigint
                FROM coupons c
                JOIN locations l ON l.id = c.location_id
                JOIN owned o ON o.domain_code = l.slug
                WHERE ($3::timestamptz IS NULL OR c.created_at >= $3)
                  AND ($4::timestamptz IS NULL OR c.created_at < $4)
                GROUP BY 1
                UNION ALL
                SELECT date_trunc('hour', c.used_at),
                       0::bigint,
                       0::bigint,
                       COUNT(*)
                FROM coupons c
                JOIN locations l ON l.id = c.location_id
                JOIN owned o ON o.domain_code = l.slug
                WHERE c.is_used = TRUE
                  AND ($3::timestamptz IS NULL OR c.used_at >= $3)
                  AND ($4::timestamptz IS NULL OR c.used_at < $4)
                GROUP BY 1
            )
            SELECT hour,
                   SUM(visits)::bigint AS visits,
                   SUM(coupons_issued)::bigint AS coupons_issued,
                   SUM(coupons_used)::bigint AS coupons_used
            FROM buckets
            GROUP BY hour
            ORDER BY hour
            "#,
        )
        .bind(query.owner_id.as_uuid())
        .bind(query.event_id.as_ref().map(|id| *id.as_uuid()))
        .bind(from)
        .bind(until)
        .fetch_all(&self.pool)
        .await
        .map_err(DomainError::database)?;

        Ok(rows.into_iter().map(HourlyCount::from).collect())
    }
}
