//! PostgreSQL implementation of the VerificationCodeStore port.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, Timestamp};
use crate::ports::{VerificationCodeRecord, VerificationCodeStore};

pub struct PostgresVerificationCodeStore {
    pool: PgPool,
}

impl PostgresVerificationCodeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct CodeRow {
    id: Uuid,
    email: String,
    code: String,
    used: bool,
    expires_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl From<CodeRow> for VerificationCodeRecord {
    fn from(row: CodeRow) -> Self {
        VerificationCodeRecord {
            id: row.id,
            email: row.email,
            code: row.code,
            used: row.used,
            expires_at: Timestamp::from_datetime(row.expires_at),
            created_at: Timestamp::from_datetime(row.created_at),
        }
    }
}

#[async_trait]
impl VerificationCodeStore for PostgresVerificationCodeStore {
    async fn insert(&self, record: &VerificationCodeRecord) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO verification_codes (id, email, code, used, expires_at, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(record.id)
        .bind(&record.email)
        .bind(&record.code)
        .bind(record.used)
        .bind(record.expires_at.as_datetime())
        .bind(record.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(DomainError::database)?;
        Ok(())
    }

    async fn find_latest(
        &self,
        email: &str,
        code: &str,
    ) -> Result<Option<VerificationCodeRecord>, DomainError> {
        let row: Option<CodeRow> = sqlx::query_as(
            r#"
            SELECT id, email, code, used, expires_at, created_at
            FROM verification_codes
            WHERE email = $1 AND code = $2
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(email)
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(DomainError::database)?;

        Ok(row.map(VerificationCodeRecord::from))
    }

    async fn mark_used(&self, id: &Uuid) -> Result<(), DomainError> {
        sqlx::query("UPDATE verification_codes SET used = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(DomainError::database)?;
        Ok(())
    }
}
