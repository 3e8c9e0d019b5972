//! PostgreSQL implementation of the StoreDirectory port.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::directory::{Location, Store, StoreKey};
use crate::domain::foundation::{DomainError, LocationId, StoreId, Timestamp};
use crate::ports::StoreDirectory;

/// PostgreSQL implementation of the StoreDirectory port.
pub struct PostgresStoreDirectory {
    pool: PgPool,
}

impl PostgresStoreDirectory {
    /// Creates a new directory backed by the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a location.
#[derive(Debug, sqlx::FromRow)]
struct LocationRow {
    id: Uuid,
    slug: String,
    name: String,
    coupon_expiry_days: Option<i32>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl From<LocationRow> for Location {
    fn from(row: LocationRow) -> Self {
        Location {
            id: LocationId::from_uuid(row.id),
            slug: row.slug,
            name: row.name,
            coupon_expiry_days: row.coupon_expiry_days,
            is_active: row.is_active,
            created_at: Timestamp::from_datetime(row.created_at),
        }
    }
}

/// Database row representation of a store.
#[derive(Debug, sqlx::FromRow)]
struct StoreRow {
    id: Uuid,
    location_id: Uuid,
    slug: String,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl From<StoreRow> for Store {
    fn from(row: StoreRow) -> Self {
        Store {
            id: StoreId::from_uuid(row.id),
            location_id: LocationId::from_uuid(row.location_id),
            slug: row.slug,
            name: row.name,
            description: row.description,
            is_active: row.is_active,
            created_at: Timestamp::from_datetime(row.created_at),
        }
    }
}

const LOCATION_COLUMNS: &str = "id, slug, name, coupon_expiry_days, is_active, created_at";
const STORE_COLUMNS: &str = "id, location_id, slug, name, description, is_active, created_at";

#[async_trait]
impl StoreDirectory for PostgresStoreDirectory {
    async fn location_by_slug(&self, slug: &str) -> Result<Option<Location>, DomainError> {
        let rows: Vec<LocationRow> = sqlx::query_as(&format!(
            "SELECT {LOCATION_COLUMNS} FROM locations WHERE slug = $1 AND is_active = TRUE ORDER BY created_at"
        ))
        .bind(slug)
        .fetch_all(&self.pool)
        .await
        .map_err(DomainError::database)?;

        // slug is unique; more than one row means the invariant broke
        if rows.len() > 1 {
            tracing::warn!(slug, matches = rows.len(), "multiple active locations share a slug");
        }
        Ok(rows.into_iter().next().map(Location::from))
    }

    async fn location_by_id(&self, id: &LocationId) -> Result<Option<Location>, DomainError> {
        let row: Option<LocationRow> = sqlx::query_as(&format!(
            "SELECT {LOCATION_COLUMNS} FROM locations WHERE id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(DomainError::database)?;

        Ok(row.map(Location::from))
    }

    async fn store_by_key(&self, key: &StoreKey) -> Result<Option<Store>, DomainError> {
        // Exact slug match first, regardless of how the key was classified.
        let row: Option<StoreRow> = sqlx::query_as(&format!(
            "SELECT {STORE_COLUMNS} FROM stores WHERE slug = $1 AND is_active = TRUE"
        ))
        .bind(key.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(DomainError::database)?;

        if let Some(row) = row {
            return Ok(Some(Store::from(row)));
        }

        // Legacy fallback on every slug miss: scan active stores for an
        // embedded temp id. Hyphenated temp ids classify as slugs, so the
        // key variant cannot gate this. O(active stores); tolerable only
        // while unmigrated records exist.
        let rows: Vec<StoreRow> = sqlx::query_as(&format!(
            "SELECT {STORE_COLUMNS} FROM stores WHERE is_active = TRUE"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(DomainError::database)?;

        Ok(rows
            .into_iter()
            .map(Store::from)
            .find(|store| store.has_temp_id(key.as_str())))
    }

    async fn store_name(&self, id: &StoreId) -> Result<Option<String>, DomainError> {
        let name: Option<(String,)> =
            sqlx::query_as("SELECT name FROM stores WHERE id = $1")
                .bind(id.as_uuid())
                .fetch_optional(&self.pool)
                .await
                .map_err(DomainError::database)?;

        Ok(name.map(|(name,)| name))
    }
}
