//! Mock authentication adapter for testing.
//!
//! Implements the `AuthProvider` port against an in-process token map so
//! tests and local development do not need the hosted auth service.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::{AuthProvider, AuthenticatedAccount, SessionToken};

/// Mock auth provider backed by token and credential maps.
///
/// Tokens not registered with `with_account` (or minted by `sign_in`) are
/// rejected as unauthorized.
#[derive(Debug, Default)]
pub struct MockAuthProvider {
    tokens: RwLock<HashMap<String, AuthenticatedAccount>>,
    credentials: RwLock<HashMap<String, (String, AuthenticatedAccount)>>,
}

impl MockAuthProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a bearer token that resolves to the given account.
    pub fn with_account(self, token: impl Into<String>, account: AuthenticatedAccount) -> Self {
        self.tokens.write().unwrap().insert(token.into(), account);
        self
    }

    /// Registers a token that resolves to a freshly minted account.
    pub fn with_test_account(self, token: impl Into<String>) -> (Self, AuthenticatedAccount) {
        let account = AuthenticatedAccount {
            user_id: UserId::new(),
            email: "tester@example.com".to_string(),
        };
        let this = self.with_account(token, account.clone());
        (this, account)
    }
}

fn unauthorized() -> DomainError {
    DomainError::new(ErrorCode::Unauthorized, "Invalid session token")
}

#[async_trait]
impl AuthProvider for MockAuthProvider {
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthenticatedAccount, DomainError> {
        let account = AuthenticatedAccount {
            user_id: UserId::new(),
            email: email.to_string(),
        };
        self.credentials
            .write()
            .unwrap()
            .insert(email.to_string(), (password.to_string(), account.clone()));
        Ok(account)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<SessionToken, DomainError> {
        let account = {
            let credentials = self.credentials.read().unwrap();
            match credentials.get(email) {
                Some((stored, account)) if stored == password => account.clone(),
                _ => return Err(unauthorized()),
            }
        };

        let token = format!("mock-token-{}", account.user_id);
        self.tokens.write().unwrap().insert(token.clone(), account);
        Ok(SessionToken {
            access_token: token,
            expires_in_secs: 3600,
        })
    }

    async fn verify_token(&self, token: &str) -> Result<AuthenticatedAccount, DomainError> {
        self.tokens
            .read()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or_else(unauthorized)
    }

    async fn sign_out(&self, token: &str) -> Result<(), DomainError> {
        self.tokens.write().unwrap().remove(token);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn registered_token_resolves_to_its_account() {
        let (provider, account) = MockAuthProvider::new().with_test_account("abc");
        let resolved = provider.verify_token("abc").await.unwrap();
        assert_eq!(resolved, account);
    }

    #[tokio::test]
    async fn unknown_token_is_unauthorized() {
        let provider = MockAuthProvider::new();
        let err = provider.verify_token("nope").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);
    }

    #[tokio::test]
    async fn sign_in_round_trip() {
        let provider = MockAuthProvider::new();
        provider.sign_up("a@b.com", "hunter2").await.unwrap();

        let session = provider.sign_in("a@b.com", "hunter2").await.unwrap();
        let account = provider.verify_token(&session.access_token).await.unwrap();
        assert_eq!(account.email, "a@b.com");

        provider.sign_out(&session.access_token).await.unwrap();
        assert!(provider.verify_token(&session.access_token).await.is_err());
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let provider = MockAuthProvider::new();
        provider.sign_up("a@b.com", "hunter2").await.unwrap();
        assert!(provider.sign_in("a@b.com", "letmein").await.is_err());
    }
}
