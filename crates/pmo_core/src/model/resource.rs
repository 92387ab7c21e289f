//! Resource domain model.
//!
//! # Responsibility
//! - Define a person or unit with a fixed work capacity per period.
//!
//! # Invariants
//! - `id` is stable and unique within one state snapshot.
//! - Persisted resources carry a finite, non-negative `capacity`.

use super::validation::{ensure_id, ensure_name, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a resource.
///
/// Kept as a string alias: identifiers come from the external backend and are
/// not guaranteed to be UUIDs.
pub type ResourceId = String;

/// Person or unit with a fixed work capacity per period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    pub name: String,
    /// Free-form role label, e.g. `Backend Engineer`.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub role: String,
    /// Hours available per period. Missing or `null` values deserialize to `0`.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub capacity: f64,
    /// Short avatar label (usually initials).
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub avatar: String,
}

impl Resource {
    /// Creates a resource with a generated stable ID.
    pub fn new(name: impl Into<String>, role: impl Into<String>, capacity: f64) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), name, role, capacity)
    }

    /// Creates a resource with a caller-provided ID.
    ///
    /// The avatar label is derived from the initials of `name`.
    pub fn with_id(
        id: impl Into<ResourceId>,
        name: impl Into<String>,
        role: impl Into<String>,
        capacity: f64,
    ) -> Self {
        let name = name.into();
        let avatar = initials(&name);
        Self {
            id: id.into(),
            name,
            role: role.into(),
            capacity,
            avatar,
        }
    }

    /// Returns whether `capacity` can be used as a load denominator.
    pub fn has_usable_capacity(&self) -> bool {
        self.capacity.is_finite() && self.capacity > 0.0
    }

    /// Validates write-side invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_id(&self.id)?;
        ensure_name(&self.id, &self.name)?;
        if !self.capacity.is_finite() || self.capacity < 0.0 {
            return Err(ValidationError::InvalidCapacity {
                id: self.id.clone(),
                capacity: self.capacity,
            });
        }
        Ok(())
    }
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{initials, Resource};

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(initials("ada byron lovelace"), "AB");
        assert_eq!(initials("Grace"), "G");
        assert_eq!(initials("   "), "");
    }

    #[test]
    fn usable_capacity_requires_positive_finite_value() {
        assert!(Resource::with_id("r1", "A", "dev", 40.0).has_usable_capacity());
        assert!(!Resource::with_id("r1", "A", "dev", 0.0).has_usable_capacity());
        assert!(!Resource::with_id("r1", "A", "dev", f64::NAN).has_usable_capacity());
        assert!(!Resource::with_id("r1", "A", "dev", -1.0).has_usable_capacity());
    }
}
