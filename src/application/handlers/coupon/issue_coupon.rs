//! IssueCouponHandler - Command handler for issuing a coupon under a location.

use std::sync::Arc;

use crate::domain::coupon::{Coupon, CouponCode};
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
use crate::ports::{CouponLedger, StoreDirectory};

/// Attempts before giving up on a unique code. The final attempt repairs the
/// previous draw with a timestamp suffix instead of drawing again.
const ISSUE_ATTEMPTS: usize = 4;

/// Command to issue a coupon for the location behind a slug.
#[derive(Debug, Clone)]
pub struct IssueCouponCommand {
    pub location_slug: String,
}

/// Handler for coupon issuance.
///
/// Generation is collision-tolerant: the ledger's unique constraint is the
/// arbiter, and a `CodeTaken` conflict simply triggers another draw. There
/// is no check-then-act window.
pub struct IssueCouponHandler {
    ledger: Arc<dyn CouponLedger>,
    directory: Arc<dyn StoreDirectory>,
}

impl IssueCouponHandler {
    pub fn new(ledger: Arc<dyn CouponLedger>, directory: Arc<dyn StoreDirectory>) -> Self {
        Self { ledger, directory }
    }

    pub async fn handle(&self, cmd: IssueCouponCommand) -> Result<Coupon, DomainError> {
        self.handle_at(cmd, Timestamp::now()).await
    }

    pub async fn handle_at(
        &self,
        cmd: IssueCouponCommand,
        now: Timestamp,
    ) -> Result<Coupon, DomainError> {
        let location = self
            .directory
            .location_by_slug(&cmd.location_slug)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::LocationNotFound,
                    format!("No active location with slug '{}'", cmd.location_slug),
                )
            })?;

        let mut code = CouponCode::generate();
        for attempt in 1..=ISSUE_ATTEMPTS {
            let coupon = Coupon::issue(code.clone(), location.id, now);
            match self.ledger.insert(&coupon).await {
                Ok(()) => return Ok(coupon),
                Err(err) if err.code == ErrorCode::CodeTaken => {
                    tracing::warn!(
                        code = %coupon.code,
                        attempt,
                        "coupon code collision, retrying"
                    );
                    code = if attempt == ISSUE_ATTEMPTS - 1 {
                        code.with_timestamp_suffix(&now)
                    } else {
                        CouponCode::generate()
                    };
                }
                Err(err) => return Err(err),
            }
        }

        Err(DomainError::new(
            ErrorCode::CodeSpaceExhausted,
            "Could not find a free coupon code",
        ))
    }
}
