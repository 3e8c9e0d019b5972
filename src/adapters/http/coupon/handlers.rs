//! HTTP handlers for coupon endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::error_response;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::coupon::{
    IssueCouponCommand, IssueCouponHandler, RedeemCouponCommand, RedeemCouponHandler,
    ValidateCouponCommand, ValidateCouponHandler,
};

use super::dto::{CouponDto, IssueCouponRequest, IssueCouponResponse, ScanRequest, ScanResponse};

#[derive(Clone)]
pub struct CouponHandlers {
    issue: Arc<IssueCouponHandler>,
    validate: Arc<ValidateCouponHandler>,
    redeem: Arc<RedeemCouponHandler>,
}

impl CouponHandlers {
    pub fn new(
        issue: Arc<IssueCouponHandler>,
        validate: Arc<ValidateCouponHandler>,
        redeem: Arc<RedeemCouponHandler>,
    ) -> Self {
        Self {
            issue,
            validate,
            redeem,
        }
    }
}

/// POST /api/coupons - issue a code under a location.
pub async fn issue_coupon(
    State(handlers): State<CouponHandlers>,
    RequireAuth(_account): RequireAuth,
    Json(req): Json<IssueCouponRequest>,
) -> Response {
    let cmd = IssueCouponCommand {
        location_slug: req.location,
    };

    match handlers.issue.handle(cmd).await {
        Ok(coupon) => (
            StatusCode::CREATED,
            Json(IssueCouponResponse {
                success: true,
                coupon: CouponDto::from(&coupon),
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

/// POST /api/coupons/validate - POS dry-run of the redemption state machine.
pub async fn validate_coupon(
    State(handlers): State<CouponHandlers>,
    Json(req): Json<ScanRequest>,
) -> Response {
    let cmd = ValidateCouponCommand {
        code: req.code,
        store: req.store,
    };

    match handlers.validate.handle(cmd).await {
        Ok(verdict) => (StatusCode::OK, Json(ScanResponse::from(&verdict))).into_response(),
        Err(e) => error_response(e),
    }
}

/// POST /api/coupons/redeem - the single state transition to "used".
pub async fn redeem_coupon(
    State(handlers): State<CouponHandlers>,
    Json(req): Json<ScanRequest>,
) -> Response {
    let cmd = RedeemCouponCommand {
        code: req.code,
        store: req.store,
    };

    match handlers.redeem.handle(cmd).await {
        Ok(outcome) => (StatusCode::OK, Json(ScanResponse::from(&outcome))).into_response(),
        Err(e) => error_response(e),
    }
}
