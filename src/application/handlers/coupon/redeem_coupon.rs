//! RedeemCouponHandler - validates, then performs the single redemption write.
//!
//! The full validator runs as a precondition; anything short of a `Valid`
//! verdict comes back untouched with no mutation. The write itself is the
//! ledger's conditional update, so two racing redeemers cannot both win: the
//! loser sees zero rows affected and is answered with the already-used
//! outcome.

use std::sync::Arc;

use crate::domain::coupon::{Coupon, CouponCode, RedemptionVerdict};
use crate::domain::directory::{Location, Store};
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
use crate::ports::{CouponLedger, StoreDirectory};

use super::{ValidateCouponCommand, ValidateCouponHandler};

/// Command to redeem a scanned code at a store.
#[derive(Debug, Clone)]
pub struct RedeemCouponCommand {
    pub code: String,
    pub store: String,
}

/// Outcome of a redemption attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum RedemptionOutcome {
    /// The coupon is now used, bound to the redeeming store.
    Redeemed {
        coupon: Coupon,
        location: Location,
        store: Store,
    },

    /// Validation said no; the verdict explains why. Nothing was written.
    NotRedeemed(RedemptionVerdict),
}

/// Handler executing the redemption transition.
pub struct RedeemCouponHandler {
    ledger: Arc<dyn CouponLedger>,
    directory: Arc<dyn StoreDirectory>,
    validator: ValidateCouponHandler,
}

impl RedeemCouponHandler {
    pub fn new(ledger: Arc<dyn CouponLedger>, directory: Arc<dyn StoreDirectory>) -> Self {
        let validator = ValidateCouponHandler::new(ledger.clone(), directory.clone());
        Self {
            ledger,
            directory,
            validator,
        }
    }

    pub async fn handle(
        &self,
        cmd: RedeemCouponCommand,
    ) -> Result<RedemptionOutcome, DomainError> {
        self.handle_at(cmd, Timestamp::now()).await
    }

    pub async fn handle_at(
        &self,
        cmd: RedeemCouponCommand,
        now: Timestamp,
    ) -> Result<RedemptionOutcome, DomainError> {
        let verdict = self
            .validator
            .handle_at(
                ValidateCouponCommand {
                    code: cmd.code.clone(),
                    store: cmd.store.clone(),
                },
                now,
            )
            .await?;

        let (location, store) = match verdict {
            RedemptionVerdict::Valid {
                location, store, ..
            } => (location, store),
            other => return Ok(RedemptionOutcome::NotRedeemed(other)),
        };

        let code = CouponCode::normalize(&cmd.code)
            .map_err(|e| DomainError::new(ErrorCode::EmptyField, e.to_string()))?;

        match self.ledger.mark_used(&code, store.id, now).await? {
            Some(coupon) => Ok(RedemptionOutcome::Redeemed {
                coupon,
                location,
                store,
            }),
            // Lost the race between validation and the write.
            None => self.already_used_outcome(&code).await,
        }
    }

    async fn already_used_outcome(
        &self,
        code: &CouponCode,
    ) -> Result<RedemptionOutcome, DomainError> {
        let coupon = self.ledger.find_by_code(code).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::CouponNotFound,
                format!("Coupon '{}' vanished during redemption", code),
            )
        })?;

        let store_name = match &coupon.validated_by_store_id {
            Some(store_id) => self.directory.store_name(store_id).await.unwrap_or_else(|e| {
                tracing::warn!(error = %e, "redeeming store name lookup failed");
                None
            }),
            None => None,
        };

        Ok(RedemptionOutcome::NotRedeemed(
            RedemptionVerdict::already_used(coupon, store_name),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryCouponLedger, InMemoryStoreDirectory};
    use crate::domain::directory::{Location, Store, StoreKey};
    use crate::domain::foundation::{LocationId, StoreId};

    struct Fixture {
        ledger: Arc<InMemoryCouponLedger>,
        directory: Arc<InMemoryStoreDirectory>,
        handler: RedeemCouponHandler,
        location_id: LocationId,
    }

    async fn fixture() -> Fixture {
        let ledger = Arc::new(InMemoryCouponLedger::new());
        let directory = Arc::new(InMemoryStoreDirectory::new());
        let location_id = LocationId::new();

        directory
            .add_location(Location {
                id: location_id,
                slug: "shop1".to_string(),
                name: "Shop One".to_string(),
                coupon_expiry_days: None,
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

        let handler = RedeemCouponHandler::new(ledger.clone(), directory.clone());
        Fixture {
            ledger,
            directory,
            handler,
            location_id,
        }
    }

    async fn issue(fixture: &Fixture) -> Coupon {
        let coupon = Coupon::issue(CouponCode::generate(), fixture.location_id, Timestamp::now());
        fixture.ledger.insert(&coupon).await.unwrap();
        coupon
    }

    fn cmd(code: &str) -> RedeemCouponCommand {
        RedeemCouponCommand {
            code: code.to_string(),
            store: "shop1-counter".to_string(),
        }
    }

    #[tokio::test]
    async fn redemption_binds_the_store_and_timestamps() {
        let fixture = fixture().await;
        let coupon = issue(&fixture).await;

        match fixture.handler.handle(cmd(coupon.code.as_str())).await.unwrap() {
            RedemptionOutcome::Redeemed {
                coupon: redeemed,
                store,
                ..
            } => {
                assert!(redeemed.is_used);
                assert_eq!(redeemed.validated_by_store_id, Some(store.id));
                assert!(redeemed.used_at.is_some());
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn second_redemption_reports_already_used_with_one_store_on_record() {
        let fixture = fixture().await;
        let coupon = issue(&fixture).await;

        fixture.handler.handle(cmd(coupon.code.as_str())).await.unwrap();

        match fixture.handler.handle(cmd(coupon.code.as_str())).await.unwrap() {
            RedemptionOutcome::NotRedeemed(RedemptionVerdict::AlreadyUsed {
                store_name, ..
            }) => {
                assert_eq!(store_name, "Shop One Counter");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }

        // exactly one redeeming store on record
        let stored = fixture
            .ledger
            .find_by_code(&coupon.code)
            .await
            .unwrap()
            .unwrap();
        let counter_id = fixture
            .directory
            .store_by_key(&StoreKey::Slug("shop1-counter".to_string()))
            .await
            .unwrap()
            .unwrap()
            .id;
        assert_eq!(stored.validated_by_store_id, Some(counter_id));
    }

    #[tokio::test]
    async fn rejection_verdicts_pass_through_without_mutation() {
        let fixture = fixture().await;

        match fixture.handler.handle(cmd("ZZZZ9999")).await.unwrap() {
            RedemptionOutcome::NotRedeemed(RedemptionVerdict::Rejected { .. }) => {}
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(fixture.ledger.count().await, 0);
    }

    #[tokio::test]
    async fn lost_race_is_answered_with_the_winning_store() {
        let fixture = fixture().await;
        let coupon = issue(&fixture).await;

        // another POS device wins between our validation and write
        let winner = StoreId::new();
        fixture
            .ledger
            .mark_used(&coupon.code, winner, Timestamp::now())
            .await
            .unwrap()
            .unwrap();

        match fixture.handler.handle(cmd(coupon.code.as_str())).await.unwrap() {
            RedemptionOutcome::NotRedeemed(RedemptionVerdict::AlreadyUsed { .. }) => {}
            other => panic!("unexpected outcome: {:?}", other),
        }

        let stored = fixture
            .ledger
            .find_by_code(&coupon.code)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.validated_by_store_id, Some(winner));
    }
}
