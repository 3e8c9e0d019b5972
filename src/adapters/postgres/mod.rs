//! PostgreSQL adapters for the persistence ports.

pub mod coupon_ledger;
pub mod event_repository;
pub mod stats_reader;
pub mod store_directory;
pub mod verification_codes;

pub use coupon_ledger::PostgresCouponLedger;
pub use event_repository::PostgresEventRepository;
pub use stats_reader::PostgresStatsReader;
pub use store_directory::PostgresStoreDirectory;
pub use verification_codes::PostgresVerificationCodeStore;
