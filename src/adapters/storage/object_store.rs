//! Hosted object-store adapter for image uploads.
//!
//! Uploads go to the storage service's object endpoint; the returned URL is
//! the service's public-object path, which requires the bucket to be public.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::ImageStorage;

/// Configuration for the hosted object store.
#[derive(Debug, Clone)]
pub struct ObjectStoreConfig {
    /// Storage API base URL, without a trailing slash.
    pub base_url: String,

    /// Service key with write access to the bucket.
    pub api_key: Secret<String>,

    /// Bucket uploads land in.
    pub bucket: String,
}

pub struct HostedObjectStore {
    config: ObjectStoreConfig,
    http_client: reqwest::Client,
}

impl HostedObjectStore {
    pub fn new(config: ObjectStoreConfig) -> Result<Self, DomainError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::StorageError,
                    format!("Failed to build HTTP client: {e}"),
                )
            })?;

        Ok(Self {
            config,
            http_client,
        })
    }

    fn base(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    fn upload_url(&self, path: &str) -> String {
        format!("{}/object/{}/{path}", self.base(), self.config.bucket)
    }

    fn public_url(&self, path: &str) -> String {
        format!("{}/object/public/{}/{path}", self.base(), self.config.bucket)
    }
}

#[async_trait]
impl ImageStorage for HostedObjectStore {
    async fn store(
        &self,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, DomainError> {
        let response = self
            .http_client
            .post(self.upload_url(path))
            .bearer_auth(self.config.api_key.expose_secret())
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("object upload failed: {e}");
                DomainError::new(ErrorCode::StorageError, "Storage service unavailable")
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("storage service returned {status}");
            return Err(DomainError::new(
                ErrorCode::StorageError,
                format!("Storage service returned {status}"),
            ));
        }

        Ok(self.public_url(path))
    }
}
