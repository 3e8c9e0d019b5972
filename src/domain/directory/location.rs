//! Location entity.
//!
//! A Location is the business running marketing events. Its `slug` doubles
//! as the event `domain_code`, and it owns the coupon expiry policy applied
//! to every coupon issued under it.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{LocationId, Timestamp};

/// A business location that owns stores and coupons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Unique identifier.
    pub id: LocationId,

    /// Unique human-readable slug, used as the event domain code.
    pub slug: String,

    /// Display name.
    pub name: String,

    /// Coupon validity in calendar days. `None` means coupons never expire.
    pub coupon_expiry_days: Option<i32>,

    /// Inactive locations are invisible to every lookup.
    pub is_active: bool,

    /// When the location was created.
    pub created_at: Timestamp,
}

impl Location {
    /// Computes the expiry instant for a coupon created at `created_at`.
    ///
    /// Expiry is the end of the calendar day `coupon_expiry_days - 1` days
    /// after issuance: a one-day validity runs through the end of the issue
    /// day, not 24 hours from issuance. Returns `None` when the location has
    /// no expiry policy.
    pub fn coupon_expiry_instant(&self, created_at: &Timestamp) -> Option<Timestamp> {
        let days = self.coupon_expiry_days?;
        Some(created_at.add_days(i64::from(days) - 1).end_of_day())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn location(expiry_days: Option<i32>) -> Location {
        Location {
            id: LocationId::new(),
            slug: "shop1".to_string(),
            name: "Shop One".to_string(),
            coupon_expiry_days: expiry_days,
            is_active: true,
            created_at: Timestamp::now(),
        }
    }

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap())
    }

    #[test]
    fn no_policy_means_no_expiry() {
        assert_eq!(location(None).coupon_expiry_instant(&Timestamp::now()), None);
    }

    #[test]
    fn one_day_validity_ends_on_the_issue_day() {
        let issued = at(2024, 1, 1, 10, 0, 0);
        let expiry = location(Some(1)).coupon_expiry_instant(&issued).unwrap();

        assert!(expiry.is_after(&at(2024, 1, 1, 23, 59, 59)));
        assert!(expiry.is_before(&at(2024, 1, 2, 0, 0, 1)));
    }

    #[test]
    fn seven_day_validity_ends_six_days_later() {
        let issued = at(2024, 1, 1, 10, 0, 0);
        let expiry = location(Some(7)).coupon_expiry_instant(&issued).unwrap();
        assert_eq!(expiry.date_string(), "2024-01-07");
    }
}
