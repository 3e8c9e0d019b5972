//! Object storage adapters for the ImageStorage port.

mod local;
mod object_store;

pub use local::LocalImageStorage;
pub use object_store::{HostedObjectStore, ObjectStoreConfig};
