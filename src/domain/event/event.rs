//! Event aggregate entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EventId, Timestamp, UserId, ValidationError};

/// A marketing event: a landing experience published under a domain code.
///
/// The `domain_code` doubles as the owning location's slug, which is how the
/// landing-page renderer and the coupon subsystem find each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier.
    pub id: EventId,

    /// Account that owns the event.
    pub owner_id: UserId,

    /// Display name.
    pub name: String,

    /// Public lookup key, also the location slug.
    pub domain_code: String,

    /// Unpublished events are invisible to the public renderer.
    pub is_published: bool,

    /// When the event was created.
    pub created_at: Timestamp,

    /// When the event was last modified.
    pub updated_at: Timestamp,
}

impl Event {
    /// Creates a new unpublished event after validating its fields.
    pub fn create(
        owner_id: UserId,
        name: impl Into<String>,
        domain_code: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let domain_code = domain_code.into();

        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        validate_domain_code(&domain_code)?;

        let now = Timestamp::now();
        Ok(Self {
            id: EventId::new(),
            owner_id,
            name,
            domain_code,
            is_published: false,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Domain codes become URL path segments and location slugs, so they are
/// restricted to lowercase alphanumerics and hyphens.
pub fn validate_domain_code(code: &str) -> Result<(), ValidationError> {
    if code.is_empty() {
        return Err(ValidationError::empty_field("domain_code"));
    }
    let ok = code
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !ok {
        return Err(ValidationError::invalid_format(
            "domain_code",
            "only lowercase letters, digits, and hyphens are allowed",
        ));
    }
    Ok(())
}
