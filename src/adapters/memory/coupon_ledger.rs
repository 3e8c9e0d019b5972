//! In-Memory Coupon Ledger Adapter
//!
//! Keeps issued coupons in a map keyed by code. Useful for testing and
//! development; mirrors the Postgres adapter's contract, including the
//! unique-code conflict and the conditional redemption update.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::coupon::{Coupon, CouponCode};
use crate::domain::foundation::{DomainError, ErrorCode, StoreId, Timestamp};
use crate::ports::CouponLedger;

/// In-memory ledger for coupons.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCouponLedger {
    coupons: Arc<RwLock<HashMap<String, Coupon>>>,
}

impl InMemoryCouponLedger {
    /// Create a new empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored coupons.
    pub async fn count(&self) -> usize {
        self.coupons.read().await.len()
    }
}

#[async_trait]
impl CouponLedger for InMemoryCouponLedger {
    async fn insert(&self, coupon: &Coupon) -> Result<(), DomainError> {
        let mut coupons = self.coupons.write().await;
        if coupons.contains_key(coupon.code.as_str()) {
            return Err(DomainError::new(
                ErrorCode::CodeTaken,
                format!("Code '{}' already exists", coupon.code),
            ));
        }
        coupons.insert(coupon.code.as_str().to_string(), coupon.clone());
        Ok(())
    }

    async fn find_by_code(&self, code: &CouponCode) -> Result<Option<Coupon>, DomainError> {
        Ok(self.coupons.read().await.get(code.as_str()).cloned())
    }

    async fn mark_used(
        &self,
        code: &CouponCode,
        store_id: StoreId,
        now: Timestamp,
    ) -> Result<Option<Coupon>, DomainError> {
        let mut coupons = self.coupons.write().await;
        match coupons.get_mut(code.as_str()) {
            Some(coupon) if !coupon.is_used => {
                *coupon = coupon.redeemed_at(store_id, now);
                Ok(Some(coupon.clone()))
            }
            _ => Ok(None),
        }
    }
}
