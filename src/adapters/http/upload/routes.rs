//! HTTP route for image uploads.

use axum::{extract::DefaultBodyLimit, routing::post, Router};

use super::handlers::{upload_image, UploadHandlers, MAX_UPLOAD_BYTES};

/// Creates the upload router, mounted at `/api`.
pub fn upload_routes(handlers: UploadHandlers) -> Router {
    // A little headroom for multipart framing around the 10 MB payload.
    Router::new()
        .route("/upload-image", post(upload_image))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + 64 * 1024))
        .with_state(handlers)
}
