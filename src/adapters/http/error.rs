//! Domain-error to HTTP response mapping.
//!
//! Every handler ends in the same envelope: `{ success: false, error }` for
//! hard errors, with the status reflecting the category (401 auth, 404 not
//! found, 400 validation, 500 unexpected). Database and collaborator detail
//! is logged, never surfaced.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};

/// The failure envelope.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

pub fn status_for(code: &ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed
        | ErrorCode::EmptyField
        | ErrorCode::InvalidFormat
        | ErrorCode::VerificationNotFound
        | ErrorCode::VerificationExpired
        | ErrorCode::VerificationUsed => StatusCode::BAD_REQUEST,
        ErrorCode::LocationNotFound
        | ErrorCode::StoreNotFound
        | ErrorCode::CouponNotFound
        | ErrorCode::EventNotFound => StatusCode::NOT_FOUND,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::CodeTaken
        | ErrorCode::CodeSpaceExhausted
        | ErrorCode::AuthProviderError
        | ErrorCode::EmailError
        | ErrorCode::StorageError
        | ErrorCode::DatabaseError
        | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Converts a hard error into its response.
pub fn error_response(e: DomainError) -> Response {
    let status = status_for(&e.code);
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(code = ?e.code, "request failed: {}", e.message);
    }
    let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
        // Raw backend detail stays in the logs.
        "Internal server error".to_string()
    } else {
        e.message
    };
    (
        status,
        Json(ErrorBody {
            success: false,
            error: message,
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_codes_map_to_404() {
        assert_eq!(status_for(&ErrorCode::StoreNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(&ErrorCode::EventNotFound), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_codes_map_to_400() {
        assert_eq!(status_for(&ErrorCode::EmptyField), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_for(&ErrorCode::VerificationExpired),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn infrastructure_codes_map_to_500() {
        assert_eq!(
            status_for(&ErrorCode::DatabaseError),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
