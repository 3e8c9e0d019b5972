//! HTTP handler for image uploads.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::adapters::http::error::error_response;
use crate::adapters::http::middleware::RequireAuth;
use crate::domain::foundation::DomainError;
use crate::ports::ImageStorage;

/// Uploads above this size are rejected.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Clone)]
pub struct UploadHandlers {
    storage: Arc<dyn ImageStorage>,
}

impl UploadHandlers {
    pub fn new(storage: Arc<dyn ImageStorage>) -> Self {
        Self { storage }
    }
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub url: String,
}

fn extension_for(content_type: &str, file_name: Option<&str>) -> String {
    if let Some(ext) = file_name.and_then(|n| n.rsplit_once('.').map(|(_, e)| e)) {
        if !ext.is_empty() && ext.len() <= 5 {
            return ext.to_ascii_lowercase();
        }
    }
    content_type
        .strip_prefix("image/")
        .unwrap_or("bin")
        .to_string()
}

/// POST /api/upload-image - multipart upload, forwarded to the object store.
///
/// Only `image/*` parts are accepted and the payload is capped at 10 MB.
pub async fn upload_image(
    State(handlers): State<UploadHandlers>,
    RequireAuth(_account): RequireAuth,
    mut multipart: Multipart,
) -> Response {
    while let Ok(Some(field)) = multipart.next_field().await {
        let content_type = field.content_type().unwrap_or("").to_string();
        if !content_type.starts_with("image/") {
            continue;
        }
        let file_name = field.file_name().map(str::to_string);

        let bytes = match field.bytes().await {
            Ok(bytes) => bytes,
            Err(_) => {
                return error_response(DomainError::validation("file", "Malformed upload body"))
            }
        };
        if bytes.len() > MAX_UPLOAD_BYTES {
            return error_response(DomainError::validation(
                "file",
                "Image exceeds the 10 MB limit",
            ));
        }

        let ext = extension_for(&content_type, file_name.as_deref());
        let path = format!("uploads/{}.{ext}", Uuid::new_v4());

        return match handlers.storage.store(&path, &content_type, bytes.to_vec()).await {
            Ok(url) => (StatusCode::OK, Json(UploadResponse { success: true, url }))
                .into_response(),
            Err(e) => error_response(e),
        };
    }

    error_response(DomainError::validation(
        "file",
        "No image part in the upload",
    ))
}
