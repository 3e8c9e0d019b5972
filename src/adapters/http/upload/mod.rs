//! HTTP adapter for image uploads.

mod handlers;
mod routes;

pub use handlers::{UploadHandlers, UploadResponse, MAX_UPLOAD_BYTES};
pub use routes::upload_routes;
