//! RequestVerificationHandler - issues an emailed verification code.

use std::sync::Arc;

use rand::Rng;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, Timestamp};
use crate::ports::{EmailSender, VerificationCodeRecord, VerificationCodeStore};

/// Verification codes stay redeemable for this long.
const CODE_TTL_SECS: u64 = 600;

/// Command to send a verification code.
#[derive(Debug, Clone)]
pub struct RequestVerificationCommand {
    pub email: String,
}

/// Handler issuing and emailing a six-digit code.
pub struct RequestVerificationHandler {
    store: Arc<dyn VerificationCodeStore>,
    email: Arc<dyn EmailSender>,
}

impl RequestVerificationHandler {
    pub fn new(store: Arc<dyn VerificationCodeStore>, email: Arc<dyn EmailSender>) -> Self {
        Self { store, email }
    }

    pub async fn handle(&self, cmd: RequestVerificationCommand) -> Result<(), DomainError> {
        let email = cmd.email.trim().to_lowercase();
        if !email.contains('@') {
            return Err(DomainError::validation("email", "Invalid email address"));
        }

        let code = format!("{:06}", rand::thread_rng().gen_range(0..1_000_000));
        let now = Timestamp::now();
        let record = VerificationCodeRecord {
            id: Uuid::new_v4(),
            email: email.clone(),
            code: code.clone(),
            used: false,
            expires_at: now.plus_secs(CODE_TTL_SECS),
            created_at: now,
        };

        self.store.insert(&record).await?;
        self.email.send_verification_code(&email, &code).await
    }
}
