//! ValidateCouponHandler - the redemption state machine.
//!
//! Decides whether a scanned code may be redeemed at a given store. One
//! strictly sequential evaluation; nothing is persisted here.
//!
//! 1. Resolve the store by slug or legacy temp id (missing store is a hard
//!    error, not a business rejection).
//! 2. Normalize the code; empty input is a hard error.
//! 3. The code must exist and belong to the store's location, otherwise the
//!    generic rejection.
//! 4. The coupon's location row must exist; a referential anomaly rejects.
//! 5. An already-used coupon is a valid terminal state reported with the
//!    redeeming store's name.
//! 6. If the location has an expiry policy and it has passed, reject with
//!    both dates.
//! 7. Otherwise the coupon is redeemable.

use std::sync::Arc;

use crate::domain::coupon::{CouponCode, RedemptionVerdict};
use crate::domain::directory::StoreKey;
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
use crate::ports::{CouponLedger, StoreDirectory};

/// Command to validate a scanned code against a store.
#[derive(Debug, Clone)]
pub struct ValidateCouponCommand {
    /// Raw scanned code; normalized before lookup.
    pub code: String,
    /// Store identifier: canonical slug or legacy temp id.
    pub store: String,
}

/// Handler evaluating the redemption state machine.
pub struct ValidateCouponHandler {
    ledger: Arc<dyn CouponLedger>,
    directory: Arc<dyn StoreDirectory>,
}

impl ValidateCouponHandler {
    pub fn new(ledger: Arc<dyn CouponLedger>, directory: Arc<dyn StoreDirectory>) -> Self {
        Self { ledger, directory }
    }

    pub async fn handle(
        &self,
        cmd: ValidateCouponCommand,
    ) -> Result<RedemptionVerdict, DomainError> {
        self.handle_at(cmd, Timestamp::now()).await
    }

    pub async fn handle_at(
        &self,
        cmd: ValidateCouponCommand,
        now: Timestamp,
    ) -> Result<RedemptionVerdict, DomainError> {
        // 1. Resolve store
        let key = StoreKey::parse(&cmd.store);
        let store = self.directory.store_by_key(&key).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::StoreNotFound,
                format!("No active store for identifier '{}'", cmd.store),
            )
        })?;

        // 2. Normalize code
        let code = CouponCode::normalize(&cmd.code)
            .map_err(|e| DomainError::new(ErrorCode::EmptyField, e.to_string()))?;

        // 3. Code must exist under the store's location
        let coupon = match self.ledger.find_by_code(&code).await? {
            Some(coupon) if coupon.belongs_to(&store.location_id) => coupon,
            _ => return Ok(RedemptionVerdict::rejected()),
        };

        // 4. The coupon's location row must exist
        let location = match self.directory.location_by_id(&coupon.location_id).await? {
            Some(location) => location,
            None => {
                tracing::warn!(
                    coupon = %coupon.code,
                    location_id = %coupon.location_id,
                    "coupon references a missing location"
                );
                return Ok(RedemptionVerdict::rejected());
            }
        };

        // 5. Already used is a terminal state, not a rejection
        if coupon.is_used {
            let store_name = match &coupon.validated_by_store_id {
                Some(store_id) => self.directory.store_name(store_id).await.unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "redeeming store name lookup failed");
                    None
                }),
                None => None,
            };
            return Ok(RedemptionVerdict::already_used(coupon, store_name));
        }

        // 6. Expiry, only when the location has a policy
        if let Some(expiry) = location.coupon_expiry_instant(&coupon.created_at) {
            if now.is_after(&expiry) {
                return Ok(RedemptionVerdict::expired(&coupon.created_at, &expiry));
            }
        }

        // 7. Redeemable
        Ok(RedemptionVerdict::Valid {
            coupon,
            location,
            store,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryCouponLedger, InMemoryStoreDirectory};
    use crate::domain::coupon::Coupon;
    use crate::domain::directory::{Location, Store};
    use crate::domain::foundation::{LocationId, StoreId};
    use chrono::{TimeZone, Utc};

    struct Fixture {
        ledger: Arc<InMemoryCouponLedger>,
        directory: Arc<InMemoryStoreDirectory>,
        handler: ValidateCouponHandler,
        location_id: LocationId,
    }

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap())
    }

    async fn fixture(expiry_days: Option<i32>) -> Fixture {
        let ledger = Arc::new(InMemoryCouponLedger::new());
        let directory = Arc::new(InMemoryStoreDirectory::new());
        let location_id = LocationId::new();

        directory
            .add_location(Location {
                id: location_id,
                slug: "shop1".to_string(),
                name: "Shop One".to_string(),
                coupon_expiry_days: expiry_days,
                is_active: true,
                created_at: Timestamp::now(),
            })
            .await;
        directory
            .add_store(Store {
                id: StoreId::new(),
                location_id,
                slug: "shop1-counter".to_string(),
                name: "Shop One Counter".to_string(),
                description: None,
                is_active: true,
                created_at: Timestamp::now(),
            })
            .await;

        let handler = ValidateCouponHandler::new(ledger.clone(), directory.clone());
        Fixture {
            ledger,
            directory,
            handler,
            location_id,
        }
    }

    async fn issue(fixture: &Fixture, at: Timestamp) -> Coupon {
        let coupon = Coupon::issue(CouponCode::generate(), fixture.location_id, at);
        fixture.ledger.insert(&coupon).await.unwrap();
        coupon
    }

    fn cmd(code: &str) -> ValidateCouponCommand {
        ValidateCouponCommand {
            code: code.to_string(),
            store: "shop1-counter".to_string(),
        }
    }

    #[tokio::test]
    async fn unknown_store_is_a_hard_error() {
        let fixture = fixture(None).await;
        let err = fixture
            .handler
            .handle(ValidateCouponCommand {
                code: "ABCD1234".to_string(),
                store: "ghost-store".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::StoreNotFound);
    }

    #[tokio::test]
    async fn empty_code_is_a_hard_error() {
        let fixture = fixture(None).await;
        let err = fixture.handler.handle(cmd("   ")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyField);
    }

    #[tokio::test]
    async fn unknown_code_is_a_rejection_not_an_error() {
        let fixture = fixture(None).await;
        let verdict = fixture.handler.handle(cmd("ZZZZ9999")).await.unwrap();
        assert_eq!(verdict, RedemptionVerdict::rejected());
    }

    #[tokio::test]
    async fn foreign_location_code_is_rejected() {
        let fixture = fixture(None).await;

        // coupon issued under a different location
        let foreign = Coupon::issue(CouponCode::generate(), LocationId::new(), Timestamp::now());
        fixture.ledger.insert(&foreign).await.unwrap();

        let verdict = fixture
            .handler
            .handle(cmd(foreign.code.as_str()))
            .await
            .unwrap();
        assert_eq!(verdict, RedemptionVerdict::rejected());
    }

    #[tokio::test]
    async fn valid_unused_coupon_resolves_location_and_store() {
        let fixture = fixture(None).await;
        let coupon = issue(&fixture, Timestamp::now()).await;

        match fixture.handler.handle(cmd(coupon.code.as_str())).await.unwrap() {
            RedemptionVerdict::Valid {
                location, store, ..
            } => {
                assert_eq!(location.slug, "shop1");
                assert_eq!(store.slug, "shop1-counter");
            }
            other => panic!("unexpected verdict: {:?}", other),
        }
    }

    #[tokio::test]
    async fn scanned_codes_are_normalized_before_lookup() {
        let fixture = fixture(None).await;
        let coupon = issue(&fixture, Timestamp::now()).await;

        let scanned = format!("  {}  ", coupon.code.as_str().to_lowercase());
        let verdict = fixture.handler.handle(cmd(&scanned)).await.unwrap();
        assert!(verdict.is_redeemable());
    }

    #[tokio::test]
    async fn used_coupon_reports_the_redeeming_store() {
        let fixture = fixture(None).await;
        let coupon = issue(&fixture, Timestamp::now()).await;

        let store = fixture
            .directory
            .store_by_key(&StoreKey::Slug("shop1-counter".to_string()))
            .await
            .unwrap()
            .unwrap();
        fixture
            .ledger
            .mark_used(&coupon.code, store.id, Timestamp::now())
            .await
            .unwrap()
            .unwrap();

        match fixture.handler.handle(cmd(coupon.code.as_str())).await.unwrap() {
            RedemptionVerdict::AlreadyUsed {
                store_name,
                message,
                ..
            } => {
                assert_eq!(store_name, "Shop One Counter");
                assert!(message.contains("Shop One Counter"));
            }
            other => panic!("unexpected verdict: {:?}", other),
        }
    }

    #[tokio::test]
    async fn used_coupon_with_unresolvable_store_says_elsewhere() {
        let fixture = fixture(None).await;
        let coupon = issue(&fixture, Timestamp::now()).await;

        // redeemed by a store the directory no longer knows
        fixture
            .ledger
            .mark_used(&coupon.code, StoreId::new(), Timestamp::now())
            .await
            .unwrap()
            .unwrap();

        match fixture.handler.handle(cmd(coupon.code.as_str())).await.unwrap() {
            RedemptionVerdict::AlreadyUsed { store_name, .. } => {
                assert_eq!(store_name, "다른 곳");
            }
            other => panic!("unexpected verdict: {:?}", other),
        }
    }

    #[tokio::test]
    async fn one_day_coupons_are_valid_through_the_issue_day() {
        let fixture = fixture(Some(1)).await;
        let coupon = issue(&fixture, at(2024, 1, 1, 10, 0, 0)).await;

        let verdict = fixture
            .handler
            .handle_at(cmd(coupon.code.as_str()), at(2024, 1, 1, 23, 59, 59))
            .await
            .unwrap();
        assert!(verdict.is_redeemable());
    }

    #[tokio::test]
    async fn one_day_coupons_expire_after_midnight() {
        let fixture = fixture(Some(1)).await;
        let coupon = issue(&fixture, at(2024, 1, 1, 10, 0, 0)).await;

        match fixture
            .handler
            .handle_at(cmd(coupon.code.as_str()), at(2024, 1, 2, 0, 0, 1))
            .await
            .unwrap()
        {
            RedemptionVerdict::Rejected { message } => {
                assert!(message.contains("2024-01-01"));
            }
            other => panic!("unexpected verdict: {:?}", other),
        }
    }

    #[tokio::test]
    async fn no_expiry_policy_means_codes_never_expire() {
        let fixture = fixture(None).await;
        let coupon = issue(&fixture, at(2020, 1, 1, 0, 0, 0)).await;

        let verdict = fixture
            .handler
            .handle_at(cmd(coupon.code.as_str()), at(2030, 1, 1, 0, 0, 0))
            .await
            .unwrap();
        assert!(verdict.is_redeemable());
    }
}
