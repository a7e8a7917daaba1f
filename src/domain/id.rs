//! Pet ID generation
//!
//! Pets are keyed by a surrogate ID rather than object identity, so two pets
//! with the same name and species stay distinct in schedule maps.
//! IDs use the format: `{6-char-hex}-pet-{slug}`
//! Example: `019430-pet-max`

use serde::{Deserialize, Serialize};

/// Generate a pet ID from its name
pub fn generate_id(name: &str) -> String {
    let uuid = uuid::Uuid::now_v7();
    let hex_prefix = &uuid.to_string()[..6];
    let slug = slugify(name);
    format!("{}-pet-{}", hex_prefix, slug)
}

/// Slugify a name for use in IDs
fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Surrogate key for a pet, used to key schedule entries
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PetId(String);

impl PetId {
    /// Generate a new ID from a pet name
    pub fn new(name: &str) -> Self {
        Self(generate_id(name))
    }

    /// Wrap an existing ID string
    pub fn from_string(id: String) -> Self {
        Self(id)
    }

    /// Get the full ID string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PetId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for PetId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
