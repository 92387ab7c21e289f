//! Domain model for the PMO dashboard state.
//!
//! # Responsibility
//! - Define the records the dashboard views are derived from.
//! - Carry the explicit application-state snapshot passed into every view
//!   computation.
//!
//! # Invariants
//! - Allocations reference resources by identifier only (weak reference).
//! - Model types never hold derived view data.

pub mod project;
pub mod resource;
pub mod risk;
pub mod state;
pub mod validation;

use serde::{Deserialize, Deserializer};

/// Deserializes an explicit `null` as `T::default()`.
///
/// Pair with `#[serde(default)]` so both a missing key and a nullable
/// backend column collapse to the default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
