//! Foundation types shared across the domain.
//!
//! Strongly-typed identifiers, the UTC timestamp value object, and the
//! error triple (`ErrorCode`, `DomainError`, `ValidationError`) used by
//! every layer above.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CouponId, EventId, LocationId, PageId, StoreId, UserId};
pub use timestamp::Timestamp;
