//! Authentication adapters.
//!
//! Implementations of the `AuthProvider` port:
//!
//! - `gotrue` - the hosted auth service used in production
//! - `mock` - in-process implementation for tests and local development

mod gotrue;
mod mock;

pub use gotrue::{GoTrueAuthProvider, GoTrueConfig};
pub use mock::MockAuthProvider;
