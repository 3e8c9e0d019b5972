//! Transactional email port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

/// Port to the transactional email collaborator.
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Sends a verification code to the given address.
    async fn send_verification_code(&self, to: &str, code: &str) -> Result<(), DomainError>;
}
