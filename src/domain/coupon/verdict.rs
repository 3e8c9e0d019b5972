//! Redemption verdicts.
//!
//! A verdict is the business outcome of validating a scanned code. Verdicts
//! are never errors: scanning a foreign, expired, or already-used code is an
//! expected outcome the POS client renders calmly. Hard failures (unknown
//! store, empty input, backend down) surface as `DomainError` instead.

use serde::Serialize;

use crate::domain::directory::{Location, Store};
use crate::domain::foundation::Timestamp;

use super::{messages, Coupon};

/// Outcome of evaluating a scanned code against a store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RedemptionVerdict {
    /// The code may be redeemed at this store right now.
    Valid {
        coupon: Coupon,
        location: Location,
        store: Store,
    },

    /// The code is unknown here, belongs elsewhere, or has expired.
    Rejected { message: String },

    /// The code was already redeemed. A terminal but *valid* state the
    /// client must render distinctly from a rejection.
    AlreadyUsed {
        coupon: Coupon,
        /// Display name of the redeeming store, or the "elsewhere" fallback.
        store_name: String,
        message: String,
    },
}

impl RedemptionVerdict {
    /// Builds the rejection verdict with the generic message.
    pub fn rejected() -> Self {
        RedemptionVerdict::Rejected {
            message: messages::INVALID_COUPON.to_string(),
        }
    }

    /// Builds the expiry rejection, naming both dates.
    pub fn expired(issued_at: &Timestamp, expiry: &Timestamp) -> Self {
        RedemptionVerdict::Rejected {
            message: messages::expired(&issued_at.date_string(), &expiry.date_string()),
        }
    }

    /// Builds the already-used verdict for a resolved or unknown store name.
    pub fn already_used(coupon: Coupon, store_name: Option<String>) -> Self {
        let store_name = store_name.unwrap_or_else(|| messages::UNKNOWN_STORE.to_string());
        let message = messages::already_used(&store_name);
        RedemptionVerdict::AlreadyUsed {
            coupon,
            store_name,
            message,
        }
    }

    /// Whether the verdict allows redemption.
    pub fn is_redeemable(&self) -> bool {
        matches!(self, RedemptionVerdict::Valid { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::coupon::CouponCode;
    use crate::domain::foundation::LocationId;
    use chrono::{TimeZone, Utc};

    #[test]
    fn already_used_defaults_to_the_elsewhere_name() {
        let coupon = Coupon::issue(CouponCode::generate(), LocationId::new(), Timestamp::now());
        match RedemptionVerdict::already_used(coupon, None) {
            RedemptionVerdict::AlreadyUsed {
                store_name,
                message,
                ..
            } => {
                assert_eq!(store_name, "다른 곳");
                assert!(message.contains("다른 곳"));
            }
            other => panic!("unexpected verdict: {:?}", other),
        }
    }

    #[test]
    fn expiry_message_names_both_dates() {
        let issued =
            Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap());
        let expiry = issued.end_of_day();
        match RedemptionVerdict::expired(&issued, &expiry) {
            RedemptionVerdict::Rejected { message } => {
                assert!(message.contains("2024-01-01"));
                assert!(message.contains("만료"));
            }
            other => panic!("unexpected verdict: {:?}", other),
        }
    }

    #[test]
    fn only_the_valid_verdict_is_redeemable() {
        assert!(!RedemptionVerdict::rejected().is_redeemable());
        let coupon = Coupon::issue(CouponCode::generate(), LocationId::new(), Timestamp::now());
        assert!(!RedemptionVerdict::already_used(coupon, None).is_redeemable());
    }
}
