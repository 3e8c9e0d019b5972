//! Coupon ledger port (the record store for issued codes).
//!
//! # Design
//!
//! Uniqueness and at-most-once redemption are the ledger's contract, not the
//! caller's. `insert` relies on a unique constraint on `code` and reports a
//! collision as `CodeTaken`; `mark_used` is a conditional update keyed on
//! `is_used = false`, so a lost race surfaces as `None` rather than a second
//! redemption. No caller ever trusts a prior read.

use async_trait::async_trait;

use crate::domain::coupon::{Coupon, CouponCode};
use crate::domain::foundation::{DomainError, StoreId, Timestamp};

/// Persistence port for coupons.
#[async_trait]
pub trait CouponLedger: Send + Sync {
    /// Inserts a freshly issued coupon.
    ///
    /// # Errors
    ///
    /// - `CodeTaken` if the code already exists (unique-constraint violation)
    /// - `DatabaseError` on any other persistence failure
    async fn insert(&self, coupon: &Coupon) -> Result<(), DomainError>;

    /// Looks a coupon up by its exact (normalized) code.
    async fn find_by_code(&self, code: &CouponCode) -> Result<Option<Coupon>, DomainError>;

    /// Atomically marks an unused coupon used, binding the redeeming store
    /// and timestamps.
    ///
    /// Returns the updated coupon, or `None` when the coupon was already
    /// used by the time the update ran (zero rows affected).
    async fn mark_used(
        &self,
        code: &CouponCode,
        store_id: StoreId,
        now: Timestamp,
    ) -> Result<Option<Coupon>, DomainError>;
}
