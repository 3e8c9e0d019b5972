//! HTTP routes for authentication endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    login, logout, request_verification_code, session, sign_up, verify_code, AuthHandlers,
};

/// Creates the auth router, mounted at `/api`.
pub fn auth_routes(handlers: AuthHandlers) -> Router {
    Router::new()
        .route("/auth/signup", post(sign_up))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/verification-codes", post(request_verification_code))
        .route("/auth/verify", post(verify_code))
        .route("/session", get(session))
        .with_state(handlers)
}
