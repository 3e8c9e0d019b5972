//! PostgreSQL implementation of the CouponLedger port.
//!
//! The `coupons.code` unique constraint is the issuance arbiter, and
//! redemption is a conditional update keyed on `is_used = false`, so neither
//! invariant rests on a prior read.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::coupon::{Coupon, CouponCode};
use crate::domain::foundation::{
    CouponId, DomainError, ErrorCode, LocationId, StoreId, Timestamp,
};
use crate::ports::CouponLedger;

/// PostgreSQL implementation of the CouponLedger port.
pub struct PostgresCouponLedger {
    pool: PgPool,
}

impl PostgresCouponLedger {
    /// Creates a new ledger backed by the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a coupon.
#[derive(Debug, sqlx::FromRow)]
struct CouponRow {
    id: Uuid,
    code: String,
    location_id: Uuid,
    is_used: bool,
    created_at: DateTime<Utc>,
    used_at: Option<DateTime<Utc>>,
    validated_at: Option<DateTime<Utc>>,
    validated_by_store_id: Option<Uuid>,
}

impl TryFrom<CouponRow> for Coupon {
    type Error = DomainError;

    fn try_from(row: CouponRow) -> Result<Self, Self::Error> {
        // stored codes are already normalized; an empty one is corruption
        let code = CouponCode::normalize(&row.code)
            .map_err(|e| DomainError::new(ErrorCode::DatabaseError, e.to_string()))?;

        Ok(Coupon {
            id: CouponId::from_uuid(row.id),
            code,
            location_id: LocationId::from_uuid(row.location_id),
            is_used: row.is_used,
            created_at: Timestamp::from_datetime(row.created_at),
            used_at: row.used_at.map(Timestamp::from_datetime),
            validated_at: row.validated_at.map(Timestamp::from_datetime),
            validated_by_store_id: row.validated_by_store_id.map(StoreId::from_uuid),
        })
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

#[async_trait]
impl CouponLedger for PostgresCouponLedger {
    async fn insert(&self, coupon: &Coupon) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO coupons (id, code, location_id, is_used, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(coupon.id.as_uuid())
        .bind(coupon.code.as_str())
        .bind(coupon.location_id.as_uuid())
        .bind(coupon.is_used)
        .bind(coupon.created_at.as_datetime())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(err) if is_unique_violation(&err) => Err(DomainError::new(
                ErrorCode::CodeTaken,
                format!("Code '{}' already exists", coupon.code),
            )),
            Err(err) => Err(DomainError::database(err)),
        }
    }

    async fn find_by_code(&self, code: &CouponCode) -> Result<Option<Coupon>, DomainError> {
        let row: Option<CouponRow> = sqlx::query_as(
            r#"
            SELECT id, code, location_id, is_used, created_at,
                   used_at, validated_at, validated_by_store_id
            FROM coupons
            WHERE code = $1
            "#,
        )
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(DomainError::database)?;

        row.map(Coupon::try_from).transpose()
    }

    async fn mark_used(
        &self,
        code: &CouponCode,
        store_id: StoreId,
        now: Timestamp,
    ) -> Result<Option<Coupon>, DomainError> {
        // `is_used = FALSE` in the predicate is what makes redemption
        // at-most-once: a racing second attempt matches zero rows.
        let row: Option<CouponRow> = sqlx::query_as(
            r#"
            UPDATE coupons
            SET is_used = TRUE,
                used_at = $2,
                validated_at = $2,
                validated_by_store_id = $3
            WHERE code = $1 AND is_used = FALSE
            RETURNING id, code, location_id, is_used, created_at,
                      used_at, validated_at, validated_by_store_id
            "#,
        )
        .bind(code.as_str())
        .bind(now.as_datetime())
        .bind(store_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(DomainError::database)?;

        row.map(Coupon::try_from).transpose()
    }
}
