//! Qoupon - marketing-event landing pages with QR coupon issuance and
//! store-scoped, single-use redemption.
//!
//! The crate is organized hexagonally: `domain` holds the entities and the
//! redemption rules, `ports` the trait seams, `application` the command and
//! query handlers, and `adapters` the PostgreSQL, HTTP, and hosted-service
//! implementations.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
