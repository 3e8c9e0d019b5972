//! ConfirmVerificationHandler - single-use, expiry-gated code check.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
use crate::ports::VerificationCodeStore;

/// Command to confirm an emailed verification code.
#[derive(Debug, Clone)]
pub struct ConfirmVerificationCommand {
    pub email: String,
    pub code: String,
}

/// Handler checking and consuming a verification code.
pub struct ConfirmVerificationHandler {
    store: Arc<dyn VerificationCodeStore>,
}

impl ConfirmVerificationHandler {
    pub fn new(store: Arc<dyn VerificationCodeStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: ConfirmVerificationCommand) -> Result<(), DomainError> {
        self.handle_at(cmd, Timestamp::now()).await
    }

    pub async fn handle_at(
        &self,
        cmd: ConfirmVerificationCommand,
        now: Timestamp,
    ) -> Result<(), DomainError> {
        let email = cmd.email.trim().to_lowercase();
        let code = cmd.code.trim();

        let record = self
            .store
            .find_latest(&email, code)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::VerificationNotFound, "Unknown verification code")
            })?;

        if record.used {
            return Err(DomainError::new(
                ErrorCode::VerificationUsed,
                "Verification code already used",
            ));
        }
        if !now.is_before(&record.expires_at) {
            return Err(DomainError::new(
                ErrorCode::VerificationExpired,
                "Verification code expired",
            ));
        }

        self.store.mark_used(&record.id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::VerificationCodeRecord;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use uuid::Uuid;

    struct SingleRowStore {
        row: Mutex<VerificationCodeRecord>,
    }

    impl SingleRowStore {
        fn new(row: VerificationCodeRecord) -> Self {
            Self {
                row: Mutex::new(row),
            }
        }
    }

    #[async_trait]
    impl VerificationCodeStore for SingleRowStore {
        async fn insert(&self, _record: &VerificationCodeRecord) -> Result<(), DomainError> {
            Ok(())
        }

        async fn find_latest(
            &self,
            email: &str,
            code: &str,
        ) -> Result<Option<VerificationCodeRecord>, DomainError> {
            let row = self.row.lock().unwrap();
            Ok((row.email == email && row.code == code).then(|| row.clone()))
        }

        async fn mark_used(&self, id: &Uuid) -> Result<(), DomainError> {
            let mut row = self.row.lock().unwrap();
            if row.id == *id {
                row.used = true;
            }
            Ok(())
        }
    }

    fn record(expires_in: u64) -> VerificationCodeRecord {
        let now = Timestamp::now();
        VerificationCodeRecord {
            id: Uuid::new_v4(),
            email: "a@b.c".to_string(),
            code: "123456".to_string(),
            used: false,
            expires_at: now.plus_secs(expires_in),
            created_at: now,
        }
    }

    fn cmd(code: &str) -> ConfirmVerificationCommand {
        ConfirmVerificationCommand {
            email: "a@b.c".to_string(),
            code: code.to_string(),
        }
    }

    #[tokio::test]
    async fn valid_codes_are_consumed() {
        let store = Arc::new(SingleRowStore::new(record(600)));
        let handler = ConfirmVerificationHandler::new(store.clone());

        handler.handle(cmd("123456")).await.unwrap();
        assert!(store.row.lock().unwrap().used);

        // second confirmation fails
        let err = handler.handle(cmd("123456")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::VerificationUsed);
    }

    #[tokio::test]
    async fn expired_codes_are_rejected() {
        let store = Arc::new(SingleRowStore::new(record(600)));
        let handler = ConfirmVerificationHandler::new(store.clone());

        let later = Timestamp::now().plus_secs(601);
        let err = handler.handle_at(cmd("123456"), later).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::VerificationExpired);
        assert!(!store.row.lock().unwrap().used);
    }

    #[tokio::test]
    async fn wrong_codes_are_not_found() {
        let handler = ConfirmVerificationHandler::new(Arc::new(SingleRowStore::new(record(600))));
        let err = handler.handle(cmd("000000")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::VerificationNotFound);
    }
}
