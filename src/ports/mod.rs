//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.

mod auth_provider;
mod coupon_ledger;
mod email_sender;
mod event_repository;
mod image_storage;
mod stats_reader;
mod store_directory;
mod verification_codes;
mod visit_log;

pub use auth_provider::{AuthProvider, AuthenticatedAccount, SessionToken};
pub use coupon_ledger::CouponLedger;
pub use email_sender::EmailSender;
pub use event_repository::{EventRepository, EventWithPages};
pub use image_storage::ImageStorage;
pub use stats_reader::StatsReader;
pub use store_directory::StoreDirectory;
pub use verification_codes::{VerificationCodeRecord, VerificationCodeStore};
pub use visit_log::VisitLog;
