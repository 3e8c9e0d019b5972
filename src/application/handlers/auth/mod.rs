//! Email verification handlers. Credential auth itself lives behind the
//! `AuthProvider` port.

mod confirm_verification;
mod request_verification;

pub use confirm_verification::{ConfirmVerificationCommand, ConfirmVerificationHandler};
pub use request_verification::{RequestVerificationCommand, RequestVerificationHandler};
