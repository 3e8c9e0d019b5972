//! Object storage port for uploaded images.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

/// Port to the object store backing image uploads.
#[async_trait]
pub trait ImageStorage: Send + Sync {
    /// Stores the bytes under `path` and returns their public URL.
    async fn store(
        &self,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, DomainError>;
}
