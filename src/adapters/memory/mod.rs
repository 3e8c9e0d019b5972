//! In-memory adapters for testing and development.

mod coupon_ledger;
mod event_repository;
mod store_directory;

pub use coupon_ledger::InMemoryCouponLedger;
pub use event_repository::InMemoryEventRepository;
pub use store_directory::InMemoryStoreDirectory;
