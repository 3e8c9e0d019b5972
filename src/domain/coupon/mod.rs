//! Coupon domain: codes, the coupon aggregate, and redemption verdicts.

mod code;
#[allow(clippy::module_inception)]
mod coupon;
pub mod messages;
mod verdict;

pub use code::{CouponCode, CODE_LENGTH};
pub use coupon::Coupon;
pub use verdict::RedemptionVerdict;
