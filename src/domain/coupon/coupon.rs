//! Coupon aggregate entity.
//!
//! # Invariants
//!
//! - `code` is unique across the system (enforced by the ledger's unique
//!   constraint, not by a prior read)
//! - `is_used` transitions false to true exactly once, never back
//! - `used_at`, `validated_at`, and `validated_by_store_id` are set iff used
//! - A coupon may only be redeemed at a store of its own location

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CouponId, LocationId, StoreId, Timestamp};

use super::CouponCode;

/// A single-use coupon issued under a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupon {
    /// Unique identifier.
    pub id: CouponId,

    /// The scannable code.
    pub code: CouponCode,

    /// Location the coupon was issued under.
    pub location_id: LocationId,

    /// Whether the coupon has been redeemed.
    pub is_used: bool,

    /// When the coupon was issued.
    pub created_at: Timestamp,

    /// When the coupon was redeemed, if it has been.
    pub used_at: Option<Timestamp>,

    /// When the redeeming validation ran, if it has.
    pub validated_at: Option<Timestamp>,

    /// The store that performed the redemption. Need not be the store the
    /// code was conceptually issued for, only one of the location's stores.
    pub validated_by_store_id: Option<StoreId>,
}

impl Coupon {
    /// Creates a fresh, unused coupon.
    pub fn issue(code: CouponCode, location_id: LocationId, now: Timestamp) -> Self {
        Self {
            id: CouponId::new(),
            code,
            location_id,
            is_used: false,
            created_at: now,
            used_at: None,
            validated_at: None,
            validated_by_store_id: None,
        }
    }

    /// Whether this coupon belongs to the given location.
    pub fn belongs_to(&self, location_id: &LocationId) -> bool {
        self.location_id == *location_id
    }

    /// Returns the redeemed copy of this coupon.
    ///
    /// Pure state transition; the ledger's conditional update is what makes
    /// it happen at most once.
    pub fn redeemed_at(&self, store_id: StoreId, now: Timestamp) -> Self {
        let mut redeemed = self.clone();
        redeemed.is_used = true;
        redeemed.used_at = Some(now);
        redeemed.validated_at = Some(now);
        redeemed.validated_by_store_id = Some(store_id);
        redeemed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_coupons_start_unused() {
        let coupon = Coupon::issue(CouponCode::generate(), LocationId::new(), Timestamp::now());
        assert!(!coupon.is_used);
        assert!(coupon.used_at.is_none());
        assert!(coupon.validated_by_store_id.is_none());
    }

    #[test]
    fn redeemed_copy_carries_store_and_timestamps() {
        let coupon = Coupon::issue(CouponCode::generate(), LocationId::new(), Timestamp::now());
        let store = StoreId::new();
        let now = Timestamp::now();

        let redeemed = coupon.redeemed_at(store, now);
        assert!(redeemed.is_used);
        assert_eq!(redeemed.used_at, Some(now));
        assert_eq!(redeemed.validated_at, Some(now));
        assert_eq!(redeemed.validated_by_store_id, Some(store));
        // issuance fields untouched
        assert_eq!(redeemed.id, coupon.id);
        assert_eq!(redeemed.created_at, coupon.created_at);
    }

    #[test]
    fn location_scoping_compares_ids() {
        let location = LocationId::new();
        let coupon = Coupon::issue(CouponCode::generate(), location, Timestamp::now());
        assert!(coupon.belongs_to(&location));
        assert!(!coupon.belongs_to(&LocationId::new()));
    }
}
