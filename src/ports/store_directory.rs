//! Location/store directory port.

use async_trait::async_trait;

use crate::domain::directory::{Location, Store, StoreKey};
use crate::domain::foundation::{DomainError, LocationId, StoreId};

/// Read-side port resolving slugs and legacy identifiers to directory rows.
#[async_trait]
pub trait StoreDirectory: Send + Sync {
    /// Resolves an active location by its exact slug.
    ///
    /// Slugs are unique; should the backend ever return more than one row,
    /// implementations log a warning and return the first in default order.
    async fn location_by_slug(&self, slug: &str) -> Result<Option<Location>, DomainError>;

    /// Resolves a location by id, active or not.
    ///
    /// Used to load a coupon's owning location; a missing row is a
    /// referential anomaly the validator treats as a rejection, not an
    /// error.
    async fn location_by_id(&self, id: &LocationId) -> Result<Option<Location>, DomainError>;

    /// Resolves an active store by key.
    ///
    /// Slug keys are an indexed exact match. Temp-id keys fall back to
    /// scanning active stores and parsing each description for an embedded
    /// `tempId`; malformed descriptions are skipped, never an error. The
    /// scan is O(active stores) and exists only for unmigrated records.
    async fn store_by_key(&self, key: &StoreKey) -> Result<Option<Store>, DomainError>;

    /// Looks up a store's display name for the "redeemed at" message.
    ///
    /// A missing store is `Ok(None)`, which callers render with the
    /// "elsewhere" fallback.
    async fn store_name(&self, id: &StoreId) -> Result<Option<String>, DomainError>;
}
