//! Application command/query handlers.
//!
//! Handlers orchestrate ports; they own no I/O and no HTTP shapes.

pub mod auth;
pub mod coupon;
pub mod event;
pub mod stats;
