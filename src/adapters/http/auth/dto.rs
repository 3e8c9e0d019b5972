//! HTTP DTOs for authentication endpoints.

use serde::{Deserialize, Serialize};

/// Credentials for sign-up and login.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

/// Request to send a verification code.
#[derive(Debug, Clone, Deserialize)]
pub struct VerificationCodeRequest {
    pub email: String,
}

/// Request to confirm an emailed code.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyRequest {
    pub email: String,
    pub code: String,
}

/// Bearer session issued on login.
#[derive(Debug, Serialize)]
pub struct SessionTokenResponse {
    pub success: bool,
    pub access_token: String,
    pub expires_in: u64,
}

/// The account behind the current session.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub success: bool,
    pub user_id: String,
    pub email: String,
}
