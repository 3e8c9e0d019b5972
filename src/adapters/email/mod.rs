//! Transactional email adapters.

mod mock;
mod resend;

pub use mock::RecordingEmailSender;
pub use resend::{ResendConfig, ResendEmailSender};
