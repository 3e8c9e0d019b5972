//! In-Memory Store Directory Adapter
//!
//! Seeds locations and stores up front; lookups mirror the Postgres
//! adapter's semantics, including the active-only filter and the legacy
//! temp-id scan.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::directory::{Location, Store, StoreKey};
use crate::domain::foundation::{DomainError, LocationId, StoreId};
use crate::ports::StoreDirectory;

/// In-memory directory of locations and stores.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStoreDirectory {
    locations: Arc<RwLock<Vec<Location>>>,
    stores: Arc<RwLock<Vec<Store>>>,
}

impl InMemoryStoreDirectory {
    /// Create a new empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a location.
    pub async fn add_location(&self, location: Location) {
        self.locations.write().await.push(location);
    }

    /// Seed a store.
    pub async fn add_store(&self, store: Store) {
        self.stores.write().await.push(store);
    }
}

#[async_trait]
impl StoreDirectory for InMemoryStoreDirectory {
    async fn location_by_slug(&self, slug: &str) -> Result<Option<Location>, DomainError> {
        Ok(self
            .locations
            .read()
            .await
            .iter()
            .find(|l| l.is_active && l.slug == slug)
            .cloned())
    }

    async fn location_by_id(&self, id: &LocationId) -> Result<Option<Location>, DomainError> {
        Ok(self
            .locations
            .read()
            .await
            .iter()
            .find(|l| l.id == *id)
            .cloned())
    }

    async fn store_by_key(&self, key: &StoreKey) -> Result<Option<Store>, DomainError> {
        let stores = self.stores.read().await;

        // Exact slug match first, regardless of how the key was classified.
        let raw = key.as_str();
        if let Some(store) = stores.iter().find(|s| s.is_active && s.slug == raw) {
            return Ok(Some(store.clone()));
        }

        // Every slug miss falls through to the legacy scan. Hyphenated temp
        // ids classify as slugs, so the key variant cannot gate it.
        Ok(stores
            .iter()
            .find(|s| s.is_active && s.has_temp_id(raw))
            .cloned())
    }

    async fn store_name(&self, id: &StoreId) -> Result<Option<String>, DomainError> {
        Ok(self
            .stores
            .read()
            .await
            .iter()
            .find(|s| s.id == *id)
            .map(|s| s.name.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;

    fn location(slug: &str, active: bool) -> Location {
        Location {
            id: LocationId::new(),
            slug: slug.to_string(),
            name: slug.to_string(),
            coupon_expiry_days: None,
            is_active: active,
            created_at: Timestamp::now(),
        }
    }

    fn store(slug: &str, description: Option<&str>) -> Store {
        Store {
            id: StoreId::new(),
            location_id: LocationId::new(),
            slug: slug.to_string(),
            name: format!("{} store", slug),
            description: description.map(String::from),
            is_active: true,
            created_at: Timestamp::now(),
        }
    }

    #[tokio::test]
    async fn inactive_locations_are_invisible() {
        let directory = InMemoryStoreDirectory::new();
        directory.add_location(location("shop1", false)).await;

        assert!(directory.location_by_slug("shop1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn temp_id_falls_back_to_description_scan() {
        let directory = InMemoryStoreDirectory::new();
        directory
            .add_store(store("", Some(r#"{"tempId":"t9","description":"legacy"}"#)))
            .await;
        directory.add_store(store("shop1-counter", None)).await;

        let legacy = directory
            .store_by_key(&StoreKey::TempId("t9".to_string()))
            .await
            .unwrap()
            .expect("legacy store resolves");
        assert_eq!(legacy.legacy_temp_id().as_deref(), Some("t9"));

        let migrated = directory
            .store_by_key(&StoreKey::Slug("shop1-counter".to_string()))
            .await
            .unwrap();
        assert!(migrated.is_some());
    }

    #[tokio::test]
    async fn hyphenated_temp_id_resolves_after_the_slug_miss() {
        let directory = InMemoryStoreDirectory::new();
        directory
            .add_store(store(
                "",
                Some(r#"{"tempId":"temp-42","description":"legacy"}"#),
            ))
            .await;

        // Classified as a slug, yet the description scan must still run.
        let found = directory
            .store_by_key(&StoreKey::parse("temp-42"))
            .await
            .unwrap()
            .expect("legacy store resolves");
        assert_eq!(found.legacy_temp_id().as_deref(), Some("temp-42"));
    }
}
