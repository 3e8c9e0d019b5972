//! Coupon lifecycle handlers: issuance, validation, redemption.

mod issue_coupon;
mod redeem_coupon;
mod validate_coupon;

pub use issue_coupon::{IssueCouponCommand, IssueCouponHandler};
pub use redeem_coupon::{RedeemCouponCommand, RedeemCouponHandler, RedemptionOutcome};
pub use validate_coupon::{ValidateCouponCommand, ValidateCouponHandler};
