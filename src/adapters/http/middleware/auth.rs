//! Authentication middleware and extractors.
//!
//! - `auth_middleware` validates Bearer tokens through the `AuthProvider`
//!   port and injects the account into request extensions
//! - `RequireAuth` rejects unauthenticated requests with 401
//! - `OptionalAuth` yields `None` for anonymous requests
//!
//! The middleware never decides provider specifics; swapping the hosted
//! service for the mock changes nothing here.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::ErrorCode;
use crate::ports::{AuthProvider, AuthenticatedAccount};

/// State for the auth middleware.
pub type AuthState = Arc<dyn AuthProvider>;

/// Validates the Bearer token if one is present.
///
/// A missing token is not an error here; handlers opt in to enforcement via
/// `RequireAuth`. An invalid token is rejected immediately so a client never
/// proceeds with a dead session.
pub async fn auth_middleware(
    State(provider): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    match token {
        Some(token) => match provider.verify_token(token).await {
            Ok(account) => {
                request.extensions_mut().insert(account);
                next.run(request).await
            }
            Err(e) => {
                let status = if e.code == ErrorCode::Unauthorized {
                    StatusCode::UNAUTHORIZED
                } else {
                    tracing::error!("auth provider failure: {}", e.message);
                    StatusCode::SERVICE_UNAVAILABLE
                };
                (
                    status,
                    Json(serde_json::json!({
                        "success": false,
                        "error": e.message,
                    })),
                )
                    .into_response()
            }
        },
        None => next.run(request).await,
    }
}

/// Extractor that requires an authenticated account.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedAccount);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedAccount>()
            .cloned()
            .map(RequireAuth)
            .ok_or(AuthRejection::Unauthenticated)
    }
}

/// Extractor for routes that merely adapt to authentication.
#[derive(Debug, Clone)]
pub struct OptionalAuth(pub Option<AuthenticatedAccount>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalAuth(
            parts.extensions.get::<AuthenticatedAccount>().cloned(),
        ))
    }
}

/// Rejection for unauthenticated access to a protected route.
#[derive(Debug, Clone)]
pub enum AuthRejection {
    Unauthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({
                "success": false,
                "error": "Authentication required",
            })),
        )
            .into_response()
    }
}
