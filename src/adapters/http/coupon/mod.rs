//! HTTP adapter for coupon endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CouponDto, IssueCouponRequest, IssueCouponResponse, ScanRequest, ScanResponse};
pub use handlers::CouponHandlers;
pub use routes::coupon_routes;
