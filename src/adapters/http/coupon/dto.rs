//! HTTP DTOs for coupon endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::coupon::RedemptionOutcome;
use crate::domain::coupon::{messages, Coupon, RedemptionVerdict};

/// Request to issue a coupon under a location.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueCouponRequest {
    /// Location slug (the event's domain code).
    pub location: String,
}

/// Request carrying a scanned code and the scanning store.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanRequest {
    pub code: String,
    /// Store identifier: canonical slug or legacy temp id.
    pub store: String,
}

/// The issued coupon as the admin client sees it.
#[derive(Debug, Clone, Serialize)]
pub struct CouponDto {
    pub id: String,
    pub code: String,
    pub location_id: String,
    pub is_used: bool,
    pub created_at: String,
    pub used_at: Option<String>,
}

impl From<&Coupon> for CouponDto {
    fn from(coupon: &Coupon) -> Self {
        Self {
            id: coupon.id.to_string(),
            code: coupon.code.as_str().to_string(),
            location_id: coupon.location_id.to_string(),
            is_used: coupon.is_used,
            created_at: coupon.created_at.as_datetime().to_rfc3339(),
            used_at: coupon.used_at.map(|t| t.as_datetime().to_rfc3339()),
        }
    }
}

/// Response to issuing a coupon.
#[derive(Debug, Serialize)]
pub struct IssueCouponResponse {
    pub success: bool,
    pub coupon: CouponDto,
}

/// The POS scan envelope.
///
/// `success` is about the operation, not the coupon: business rejections are
/// successful scans of an unredeemable code. `is_used` doubles as "redeemed
/// just now" on the redeem endpoint.
#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub success: bool,
    pub is_valid: bool,
    pub is_used: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon: Option<CouponDto>,
    /// Display name of the store that redeemed the coupon, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_at_store: Option<String>,
}

impl From<&RedemptionVerdict> for ScanResponse {
    fn from(verdict: &RedemptionVerdict) -> Self {
        match verdict {
            RedemptionVerdict::Valid { coupon, .. } => Self {
                success: true,
                is_valid: true,
                is_used: false,
                message: messages::VALID_COUPON.to_string(),
                coupon: Some(CouponDto::from(coupon)),
                used_at_store: None,
            },
            RedemptionVerdict::Rejected { message } => Self {
                success: true,
                is_valid: false,
                is_used: false,
                message: message.clone(),
                coupon: None,
                used_at_store: None,
            },
            RedemptionVerdict::AlreadyUsed {
                coupon,
                store_name,
                message,
            } => Self {
                success: true,
                is_valid: true,
                is_used: true,
                message: message.clone(),
                coupon: Some(CouponDto::from(coupon)),
                used_at_store: Some(store_name.clone()),
            },
        }
    }
}

impl From<&RedemptionOutcome> for ScanResponse {
    fn from(outcome: &RedemptionOutcome) -> Self {
        match outcome {
            RedemptionOutcome::Redeemed { coupon, store, .. } => Self {
                success: true,
                is_valid: true,
                is_used: true,
                message: messages::COUPON_REDEEMED.to_string(),
                coupon: Some(CouponDto::from(coupon)),
                used_at_store: Some(store.name.clone()),
            },
            RedemptionOutcome::NotRedeemed(verdict) => Self::from(verdict),
        }
    }
}
