//! Domain layer: pure types and logic, no I/O.

pub mod coupon;
pub mod directory;
pub mod event;
pub mod foundation;
pub mod stats;
