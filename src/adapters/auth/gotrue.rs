//! GoTrue adapter for the hosted authentication service.
//!
//! Sign-up, sign-in, and sign-out go over HTTP to the provider. Token
//! verification is done locally: the provider signs access tokens with a
//! shared HS256 secret, so a round-trip per request is unnecessary.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::{AuthProvider, AuthenticatedAccount, SessionToken};

/// Configuration for the GoTrue adapter.
#[derive(Debug, Clone)]
pub struct GoTrueConfig {
    /// Base URL of the auth service, without a trailing slash.
    pub base_url: String,

    /// Public API key sent as the `apikey` header.
    pub api_key: Secret<String>,

    /// HS256 secret the provider signs access tokens with.
    pub jwt_secret: Secret<String>,

    /// Expected audience claim. GoTrue issues `authenticated`.
    pub audience: String,
}

/// Claims carried in a GoTrue access token.
#[derive(Debug, Deserialize)]
struct AccessTokenClaims {
    sub: String,
    #[serde(default)]
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default, alias = "error_description", alias = "msg")]
    message: Option<String>,
}

pub struct GoTrueAuthProvider {
    config: GoTrueConfig,
    http_client: reqwest::Client,
}

impl GoTrueAuthProvider {
    pub fn new(config: GoTrueConfig) -> Result<Self, DomainError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::AuthProviderError,
                    format!("Failed to build HTTP client: {e}"),
                )
            })?;

        Ok(Self {
            config,
            http_client,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url.trim_end_matches('/'))
    }

    async fn provider_error(response: reqwest::Response) -> DomainError {
        let status = response.status();
        let message = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| format!("auth service returned {status}"));

        let code = if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::BAD_REQUEST
        {
            ErrorCode::Unauthorized
        } else {
            ErrorCode::AuthProviderError
        };
        DomainError::new(code, message)
    }

    fn transport_error(err: reqwest::Error) -> DomainError {
        tracing::error!("auth service request failed: {err}");
        DomainError::new(ErrorCode::AuthProviderError, "Auth service unavailable")
    }

    fn account_from_user(user: UserResponse) -> Result<AuthenticatedAccount, DomainError> {
        let user_id = UserId::from_str(&user.id).map_err(|_| {
            DomainError::new(
                ErrorCode::AuthProviderError,
                "Auth service returned a malformed user id",
            )
        })?;
        Ok(AuthenticatedAccount {
            user_id,
            email: user.email.unwrap_or_default(),
        })
    }
}

#[async_trait]
impl AuthProvider for GoTrueAuthProvider {
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthenticatedAccount, DomainError> {
        let response = self
            .http_client
            .post(self.endpoint("/signup"))
            .header("apikey", self.config.api_key.expose_secret())
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            return Err(Self::provider_error(response).await);
        }

        let user: UserResponse = response.json().await.map_err(Self::transport_error)?;
        Self::account_from_user(user)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<SessionToken, DomainError> {
        let response = self
            .http_client
            .post(self.endpoint("/token?grant_type=password"))
            .header("apikey", self.config.api_key.expose_secret())
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            return Err(Self::provider_error(response).await);
        }

        let body: TokenResponse = response.json().await.map_err(Self::transport_error)?;
        Ok(SessionToken {
            access_token: body.access_token,
            expires_in_secs: body.expires_in,
        })
    }

    async fn verify_token(&self, token: &str) -> Result<AuthenticatedAccount, DomainError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&self.config.audience]);
        validation.set_required_spec_claims(&["exp", "sub"]);

        let key = DecodingKey::from_secret(self.config.jwt_secret.expose_secret().as_bytes());
        let data = decode::<AccessTokenClaims>(token, &key, &validation).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;
            match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("access token expired");
                    DomainError::new(ErrorCode::Unauthorized, "Session expired")
                }
                _ => {
                    tracing::debug!("access token rejected: {e}");
                    DomainError::new(ErrorCode::Unauthorized, "Invalid session token")
                }
            }
        })?;

        let user_id = UserId::from_str(&data.claims.sub)
            .map_err(|_| DomainError::new(ErrorCode::Unauthorized, "Invalid session token"))?;

        Ok(AuthenticatedAccount {
            user_id,
            email: data.claims.email.unwrap_or_default(),
        })
    }

    async fn sign_out(&self, token: &str) -> Result<(), DomainError> {
        let response = self
            .http_client
            .post(self.endpoint("/logout"))
            .header("apikey", self.config.api_key.expose_secret())
            .bearer_auth(token)
            .send()
            .await
            .map_err(Self::transport_error)?;

        // Revocation of an already-dead session is not an error.
        if !response.status().is_success()
            && response.status() != reqwest::StatusCode::UNAUTHORIZED
        {
            return Err(Self::provider_error(response).await);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde::Serialize;

    #[derive(Serialize)]
    struct TestClaims {
        sub: String,
        email: String,
        aud: String,
        exp: i64,
    }

    fn provider(secret: &str) -> GoTrueAuthProvider {
        GoTrueAuthProvider::new(GoTrueConfig {
            base_url: "http://localhost:9999".to_string(),
            api_key: Secret::new("anon".to_string()),
            jwt_secret: Secret::new(secret.to_string()),
            audience: "authenticated".to_string(),
        })
        .unwrap()
    }

    fn sign(claims: &TestClaims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn accepts_a_token_signed_with_the_shared_secret() {
        let user_id = UserId::new();
        let token = sign(
            &TestClaims {
                sub: user_id.to_string(),
                email: "owner@example.com".to_string(),
                aud: "authenticated".to_string(),
                exp: chrono::Utc::now().timestamp() + 3600,
            },
            "top-secret",
        );

        let account = provider("top-secret").verify_token(&token).await.unwrap();
        assert_eq!(account.user_id, user_id);
        assert_eq!(account.email, "owner@example.com");
    }

    #[tokio::test]
    async fn rejects_a_token_signed_with_another_secret() {
        let token = sign(
            &TestClaims {
                sub: UserId::new().to_string(),
                email: "owner@example.com".to_string(),
                aud: "authenticated".to_string(),
                exp: chrono::Utc::now().timestamp() + 3600,
            },
            "wrong-secret",
        );

        let err = provider("top-secret").verify_token(&token).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);
    }

    #[tokio::test]
    async fn rejects_an_expired_token() {
        let token = sign(
            &TestClaims {
                sub: UserId::new().to_string(),
                email: "owner@example.com".to_string(),
                aud: "authenticated".to_string(),
                exp: chrono::Utc::now().timestamp() - 60,
            },
            "top-secret",
        );

        let err = provider("top-secret").verify_token(&token).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);
    }

    #[tokio::test]
    async fn rejects_a_token_with_the_wrong_audience() {
        let token = sign(
            &TestClaims {
                sub: UserId::new().to_string(),
                email: "owner@example.com".to_string(),
                aud: "somewhere-else".to_string(),
                exp: chrono::Utc::now().timestamp() + 3600,
            },
            "top-secret",
        );

        let err = provider("top-secret").verify_token(&token).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);
    }
}
