//! Location and store directory types.

mod location;
mod qr;
mod store;

pub use location::Location;
pub use qr::parse_scan_payload;
pub use store::{Store, StoreKey};
