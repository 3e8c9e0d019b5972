//! Email configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Email configuration (Resend)
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// Resend API key
    pub resend_api_key: String,

    /// Resend API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// From email address
    #[serde(default = "default_from_email")]
    pub from_email: String,

    /// From name
    #[serde(default = "default_from_name")]
    pub from_name: String,
}

impl EmailConfig {
    /// Get formatted "From" header value
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }

    /// Validate email configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.resend_api_key.is_empty() {
            return Err(ValidationError::MissingRequired("EMAIL__RESEND_API_KEY"));
        }
        if !self.resend_api_key.starts_with("re_") {
            return Err(ValidationError::InvalidResendKey);
        }
        if !self.from_email.contains('@') {
            return Err(ValidationError::InvalidFromEmail);
        }
        Ok(())
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            resend_api_key: String::new(),
            base_url: default_base_url(),
            from_email: default_from_email(),
            from_name: default_from_name(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.resend.com".to_string()
}

fn default_from_email() -> String {
    "no-reply@qoupon.app".to_string()
}

fn default_from_name() -> String {
    "Qoupon".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_header_combines_name_and_address() {
        let config = EmailConfig::default();
        assert_eq!(config.from_header(), "Qoupon <no-reply@qoupon.app>");
    }

    #[test]
    fn api_key_prefix_is_enforced() {
        let config = EmailConfig {
            resend_api_key: "sk_wrong".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
