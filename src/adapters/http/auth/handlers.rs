//! HTTP handlers for authentication endpoints.
//!
//! Thin wrappers: credential flows go straight to the auth provider port,
//! verification codes go through their command handlers.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::error_response;
use crate::adapters::http::event::AckResponse;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::auth::{
    ConfirmVerificationCommand, ConfirmVerificationHandler, RequestVerificationCommand,
    RequestVerificationHandler,
};
use crate::ports::AuthProvider;

use super::dto::{
    CredentialsRequest, SessionResponse, SessionTokenResponse, VerificationCodeRequest,
    VerifyRequest,
};

#[derive(Clone)]
pub struct AuthHandlers {
    provider: Arc<dyn AuthProvider>,
    request_verification: Arc<RequestVerificationHandler>,
    confirm_verification: Arc<ConfirmVerificationHandler>,
}

impl AuthHandlers {
    pub fn new(
        provider: Arc<dyn AuthProvider>,
        request_verification: Arc<RequestVerificationHandler>,
        confirm_verification: Arc<ConfirmVerificationHandler>,
    ) -> Self {
        Self {
            provider,
            request_verification,
            confirm_verification,
        }
    }
}

/// POST /api/auth/signup - register an account with the auth provider.
pub async fn sign_up(
    State(handlers): State<AuthHandlers>,
    Json(req): Json<CredentialsRequest>,
) -> Response {
    match handlers.provider.sign_up(&req.email, &req.password).await {
        Ok(account) => (
            StatusCode::CREATED,
            Json(SessionResponse {
                success: true,
                user_id: account.user_id.to_string(),
                email: account.email,
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

/// POST /api/auth/login - exchange credentials for a bearer session.
pub async fn login(
    State(handlers): State<AuthHandlers>,
    Json(req): Json<CredentialsRequest>,
) -> Response {
    match handlers.provider.sign_in(&req.email, &req.password).await {
        Ok(session) => (
            StatusCode::OK,
            Json(SessionTokenResponse {
                success: true,
                access_token: session.access_token,
                expires_in: session.expires_in_secs,
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

/// POST /api/auth/logout - revoke the current session, best-effort.
pub async fn logout(
    State(handlers): State<AuthHandlers>,
    headers: axum::http::HeaderMap,
) -> Response {
    let token = headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    if let Some(token) = token {
        if let Err(e) = handlers.provider.sign_out(token).await {
            return error_response(e);
        }
    }
    (StatusCode::OK, Json(AckResponse { success: true })).into_response()
}

/// GET /api/session - introspect the current bearer token.
pub async fn session(RequireAuth(account): RequireAuth) -> Response {
    (
        StatusCode::OK,
        Json(SessionResponse {
            success: true,
            user_id: account.user_id.to_string(),
            email: account.email,
        }),
    )
        .into_response()
}

/// POST /api/auth/verification-codes - email a six-digit code.
pub async fn request_verification_code(
    State(handlers): State<AuthHandlers>,
    Json(req): Json<VerificationCodeRequest>,
) -> Response {
    let cmd = RequestVerificationCommand { email: req.email };

    match handlers.request_verification.handle(cmd).await {
        Ok(()) => (StatusCode::OK, Json(AckResponse { success: true })).into_response(),
        Err(e) => error_response(e),
    }
}

/// POST /api/auth/verify - consume an emailed code.
pub async fn verify_code(
    State(handlers): State<AuthHandlers>,
    Json(req): Json<VerifyRequest>,
) -> Response {
    let cmd = ConfirmVerificationCommand {
        email: req.email,
        code: req.code,
    };

    match handlers.confirm_verification.handle(cmd).await {
        Ok(()) => (StatusCode::OK, Json(AckResponse { success: true })).into_response(),
        Err(e) => error_response(e),
    }
}
