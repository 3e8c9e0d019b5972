//! Authentication configuration

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Authentication configuration (hosted GoTrue service)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Base URL of the auth service
    pub url: String,

    /// Public API key
    pub api_key: String,

    /// HS256 secret access tokens are signed with
    pub jwt_secret: String,

    /// Expected audience claim
    #[serde(default = "default_audience")]
    pub audience: String,
}

impl AuthConfig {
    /// Validate auth configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__URL"));
        }
        if self.api_key.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__API_KEY"));
        }
        if self.jwt_secret.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"));
        }
        if *environment == Environment::Production && !self.url.starts_with("https://") {
            return Err(ValidationError::AuthUrlMustBeHttps);
        }
        Ok(())
    }
}

fn default_audience() -> String {
    "authenticated".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> AuthConfig {
        AuthConfig {
            url: "https://auth.example.com".to_string(),
            api_key: "anon".to_string(),
            jwt_secret: "secret".to_string(),
            audience: default_audience(),
        }
    }

    #[test]
    fn production_requires_https() {
        let config = AuthConfig {
            url: "http://auth.example.com".to_string(),
            ..valid()
        };
        assert!(config.validate(&Environment::Development).is_ok());
        assert!(config.validate(&Environment::Production).is_err());
    }

    #[test]
    fn jwt_secret_is_required() {
        let config = AuthConfig {
            jwt_secret: String::new(),
            ..valid()
        };
        assert!(config.validate(&Environment::Development).is_err());
    }
}
