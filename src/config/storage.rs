//! Object storage configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Object storage configuration (hosted store for uploaded images)
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Storage API base URL
    pub url: String,

    /// Service key with write access
    pub api_key: String,

    /// Bucket uploads land in
    #[serde(default = "default_bucket")]
    pub bucket: String,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::MissingRequired("STORAGE__URL"));
        }
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(ValidationError::InvalidStorageUrl);
        }
        if self.api_key.is_empty() {
            return Err(ValidationError::MissingRequired("STORAGE__API_KEY"));
        }
        Ok(())
    }
}

fn default_bucket() -> String {
    "event-images".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_scheme_is_checked() {
        let config = StorageConfig {
            url: "ftp://files.example.com".to_string(),
            api_key: "key".to_string(),
            bucket: default_bucket(),
        };
        assert!(config.validate().is_err());
    }
}
