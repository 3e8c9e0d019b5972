//! Resend adapter for transactional email.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::EmailSender;

/// Configuration for the Resend adapter.
#[derive(Debug, Clone)]
pub struct ResendConfig {
    /// API base URL, without a trailing slash.
    pub base_url: String,

    /// Bearer API key.
    pub api_key: Secret<String>,

    /// Sender address, e.g. `"Qoupon <no-reply@qoupon.app>"`.
    pub from: String,
}

pub struct ResendEmailSender {
    config: ResendConfig,
    http_client: reqwest::Client,
}

impl ResendEmailSender {
    pub fn new(config: ResendConfig) -> Result<Self, DomainError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::EmailError,
                    format!("Failed to build HTTP client: {e}"),
                )
            })?;

        Ok(Self {
            config,
            http_client,
        })
    }
}

fn verification_body(code: &str) -> String {
    format!(
        "<p>인증 코드: <strong>{code}</strong></p>\
         <p>이 코드는 10분 동안 유효합니다.</p>"
    )
}

#[async_trait]
impl EmailSender for ResendEmailSender {
    async fn send_verification_code(&self, to: &str, code: &str) -> Result<(), DomainError> {
        let url = format!("{}/emails", self.config.base_url.trim_end_matches('/'));
        let response = self
            .http_client
            .post(&url)
            .bearer_auth(self.config.api_key.expose_secret())
            .json(&serde_json::json!({
                "from": self.config.from,
                "to": [to],
                "subject": "이메일 인증 코드",
                "html": verification_body(code),
            }))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("email send failed: {e}");
                DomainError::new(ErrorCode::EmailError, "Email service unavailable")
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("email service returned {status}");
            return Err(DomainError::new(
                ErrorCode::EmailError,
                format!("Email service returned {status}"),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_carries_the_code() {
        let body = verification_body("123456");
        assert!(body.contains("123456"));
    }
}
