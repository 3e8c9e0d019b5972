//! Filesystem-backed image storage for local development and tests.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::ImageStorage;

/// Stores uploads under a base directory and returns URLs under a configured
/// public prefix. The caller is responsible for actually serving that prefix.
#[derive(Debug, Clone)]
pub struct LocalImageStorage {
    base_path: PathBuf,
    public_prefix: String,
}

impl LocalImageStorage {
    pub fn new<P: AsRef<Path>>(base_path: P, public_prefix: impl Into<String>) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
            public_prefix: public_prefix.into(),
        }
    }

    fn io_error(e: std::io::Error) -> DomainError {
        DomainError::new(ErrorCode::StorageError, format!("Local storage I/O: {e}"))
    }
}

#[async_trait]
impl ImageStorage for LocalImageStorage {
    async fn store(
        &self,
        path: &str,
        _content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, DomainError> {
        // Uploaded paths are server-generated, but reject traversal anyway.
        if path.contains("..") || path.starts_with('/') {
            return Err(DomainError::new(
                ErrorCode::StorageError,
                "Invalid storage path",
            ));
        }

        let target = self.base_path.join(path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).await.map_err(Self::io_error)?;
        }
        fs::write(&target, bytes).await.map_err(Self::io_error)?;

        Ok(format!(
            "{}/{path}",
            self.public_prefix.trim_end_matches('/')
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_bytes_and_returns_a_public_url() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalImageStorage::new(dir.path(), "http://localhost:8080/uploads");

        let url = storage
            .store("events/banner.png", "image/png", vec![1, 2, 3])
            .await
            .unwrap();

        assert_eq!(url, "http://localhost:8080/uploads/events/banner.png");
        let written = tokio::fs::read(dir.path().join("events/banner.png"))
            .await
            .unwrap();
        assert_eq!(written, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn rejects_path_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalImageStorage::new(dir.path(), "http://localhost:8080/uploads");

        let err = storage
            .store("../escape.png", "image/png", vec![1])
            .await
            .unwrap_err();
        assert_eq!(err.code, crate::domain::foundation::ErrorCode::StorageError);
    }
}
