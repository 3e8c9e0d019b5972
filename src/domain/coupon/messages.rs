//! User-facing redemption messages.
//!
//! All POS-facing strings are pre-written Korean copy. Raw backend error
//! text never reaches these messages.

/// Generic rejection for unknown, garbage, or foreign-location codes.
pub const INVALID_COUPON: &str = "유효하지 않은 쿠폰입니다.";

/// Shown when the coupon may be redeemed.
pub const VALID_COUPON: &str = "사용 가능한 쿠폰입니다.";

/// Shown right after a successful redemption.
pub const COUPON_REDEEMED: &str = "쿠폰이 사용 처리되었습니다.";

/// Fallback store name when the redeeming store cannot be resolved.
pub const UNKNOWN_STORE: &str = "다른 곳";

/// Message for an already-redeemed coupon, naming where it was used.
pub fn already_used(store_name: &str) -> String {
    format!("이미 사용된 쿠폰입니다. ({}에서 사용)", store_name)
}

/// Message for an expired coupon, carrying both dates.
pub fn expired(issued_date: &str, expiry_date: &str) -> String {
    format!(
        "기간이 만료된 쿠폰입니다. (발급일: {}, 만료일: {})",
        issued_date, expiry_date
    )
}
