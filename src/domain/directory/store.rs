//! Store entity and the dual-identifier store key.
//!
//! Migrated stores are addressed by their canonical slug, conventionally
//! `{domain_code}-{store_name}`. Legacy records predate the slug column and
//! instead carry a temporary identifier embedded as JSON in the free-text
//! `description` field. Both addressing schemes remain supported.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{LocationId, StoreId, Timestamp};

/// A physical store belonging to a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    /// Unique identifier.
    pub id: StoreId,

    /// Owning location.
    pub location_id: LocationId,

    /// Canonical slug. Legacy records may carry an empty or placeholder slug
    /// and are addressed through the embedded temp id instead.
    pub slug: String,

    /// Display name, shown in "redeemed at" messages.
    pub name: String,

    /// Free-text description. Legacy records embed `{ "tempId": ..., "description": ... }`.
    pub description: Option<String>,

    /// Inactive stores are invisible to every lookup.
    pub is_active: bool,

    /// When the store was created.
    pub created_at: Timestamp,
}

impl Store {
    /// Extracts the legacy temp id embedded in the description, if any.
    ///
    /// Malformed or non-JSON descriptions are never an error; they simply
    /// carry no temp id.
    pub fn legacy_temp_id(&self) -> Option<String> {
        let raw = self.description.as_deref()?;
        let embedded: EmbeddedDescription = serde_json::from_str(raw).ok()?;
        Some(embedded.temp_id)
    }

    /// Whether the embedded legacy temp id equals the given identifier.
    ///
    /// Temp ids are compared raw, never through [`StoreKey`] classification:
    /// legacy records are free to carry hyphenated temp ids that would
    /// classify as slugs.
    pub fn has_temp_id(&self, identifier: &str) -> bool {
        self.legacy_temp_id().as_deref() == Some(identifier)
    }
}

/// Legacy description payload: `{ "tempId": "...", "description": "..." }`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EmbeddedDescription {
    temp_id: String,
}

/// How a store is addressed by a scanned QR payload or an API call.
///
/// Slug lookup hits an index; the temp-id variant requires scanning active
/// stores and is tolerated only for not-yet-migrated records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreKey {
    /// Canonical slug of a migrated store.
    Slug(String),
    /// Temporary identifier of a legacy store, embedded in its description.
    TempId(String),
}

impl StoreKey {
    /// Classifies a raw identifier.
    ///
    /// Migrated slugs follow `{domain_code}-{store_name}` and always contain
    /// a hyphen. The classification is a fast-path hint only: the directory
    /// tries every identifier as a slug first and falls back to the legacy
    /// temp-id scan on any miss, so a misclassified identifier (a hyphenated
    /// temp id, say) still resolves.
    pub fn parse(identifier: &str) -> StoreKey {
        if identifier.contains('-') {
            StoreKey::Slug(identifier.to_string())
        } else {
            StoreKey::TempId(identifier.to_string())
        }
    }

    /// Returns the raw identifier.
    pub fn as_str(&self) -> &str {
        match self {
            StoreKey::Slug(s) | StoreKey::TempId(s) => s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(slug: &str, description: Option<&str>) -> Store {
        Store {
            id: StoreId::new(),
            location_id: LocationId::new(),
            slug: slug.to_string(),
            name: "Counter".to_string(),
            description: description.map(String::from),
            is_active: true,
            created_at: Timestamp::now(),
        }
    }

    #[test]
    fn temp_id_is_recovered_from_embedded_json() {
        let s = store("", Some(r#"{"tempId":"t123","description":"old counter"}"#));
        assert_eq!(s.legacy_temp_id().as_deref(), Some("t123"));
        assert!(s.has_temp_id("t123"));
        assert!(!s.has_temp_id("t999"));
    }

    #[test]
    fn hyphenated_temp_id_is_compared_raw() {
        let s = store("", Some(r#"{"tempId":"temp-42","description":"old counter"}"#));
        assert_eq!(
            StoreKey::parse("temp-42"),
            StoreKey::Slug("temp-42".to_string())
        );
        assert!(s.has_temp_id("temp-42"));
    }

    #[test]
    fn malformed_description_is_not_a_match() {
        let s = store("", Some("just free text, not json"));
        assert_eq!(s.legacy_temp_id(), None);
        assert!(!s.has_temp_id("t123"));
    }

    #[test]
    fn parse_classifies_by_hyphen_convention() {
        assert_eq!(
            StoreKey::parse("shop1-counter"),
            StoreKey::Slug("shop1-counter".to_string())
        );
        assert_eq!(StoreKey::parse("t123"), StoreKey::TempId("t123".to_string()));
    }
}
