//! Adapters - implementations of the ports against real infrastructure.
//!
//! - `postgres` - sqlx repositories for the persistence ports
//! - `http` - axum REST surface
//! - `auth` - hosted auth service client and mock
//! - `email` - transactional email client and recorder
//! - `storage` - object store client and local filesystem fallback
//! - `memory` - in-memory port implementations for tests

pub mod auth;
pub mod email;
pub mod http;
pub mod memory;
pub mod postgres;
pub mod storage;
