//! Email verification code store port.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, Timestamp};

/// A stored verification code row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationCodeRecord {
    pub id: Uuid,
    pub email: String,
    /// Six-digit numeric code as issued.
    pub code: String,
    pub used: bool,
    pub expires_at: Timestamp,
    pub created_at: Timestamp,
}

impl VerificationCodeRecord {
    /// Whether the code is still redeemable at `now`.
    pub fn is_redeemable(&self, now: &Timestamp) -> bool {
        !self.used && now.is_before(&self.expires_at)
    }
}

/// Persistence port for verification codes.
#[async_trait]
pub trait VerificationCodeStore: Send + Sync {
    /// Stores a freshly issued code.
    async fn insert(&self, record: &VerificationCodeRecord) -> Result<(), DomainError>;

    /// Finds the most recent row for an email/code pair, used or not.
    async fn find_latest(
        &self,
        email: &str,
        code: &str,
    ) -> Result<Option<VerificationCodeRecord>, DomainError>;

    /// Marks a row used. Idempotent.
    async fn mark_used(&self, id: &Uuid) -> Result<(), DomainError>;
}
