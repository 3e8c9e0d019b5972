//! Authentication provider port.
//!
//! Authentication itself is delegated to the hosted auth service; this port
//! is the oracle mapping credentials and bearer tokens to account
//! identities. Keeping it a port lets the HTTP middleware stay
//! provider-agnostic and lets tests swap in a mock.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};

/// An authenticated account identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedAccount {
    pub user_id: UserId,
    pub email: String,
}

/// A bearer session issued by the provider.
#[derive(Debug, Clone)]
pub struct SessionToken {
    pub access_token: String,
    pub expires_in_secs: u64,
}

/// Port to the hosted authentication service.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Registers a new account.
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthenticatedAccount, DomainError>;

    /// Exchanges credentials for a bearer session.
    async fn sign_in(&self, email: &str, password: &str) -> Result<SessionToken, DomainError>;

    /// Maps a bearer token to the account it belongs to.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` for expired, malformed, or revoked tokens
    async fn verify_token(&self, token: &str) -> Result<AuthenticatedAccount, DomainError>;

    /// Revokes a bearer session. Best-effort on providers without a revoke
    /// endpoint.
    async fn sign_out(&self, token: &str) -> Result<(), DomainError>;
}
