//! Explicit application-state snapshot.
//!
//! # Responsibility
//! - Hold the resources, projects and risks a render pass reads.
//! - Parse/emit the JSON snapshot shape returned by the hosted backend.
//!
//! # Invariants
//! - A snapshot is immutable for the duration of a render pass; view
//!   computations only borrow it.

use super::project::Project;
use super::resource::Resource;
use super::risk::Risk;
use super::validation::ValidationError;
use serde::{Deserialize, Serialize};

/// Application state consumed by the dashboard views.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub resources: Vec<Resource>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub projects: Vec<Project>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub risks: Vec<Risk>,
}

impl AppState {
    /// Parses a JSON snapshot. Missing top-level arrays default to empty.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Emits a pretty-printed JSON snapshot.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Validates every record in declaration order, stopping at the first error.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for resource in &self.resources {
            resource.validate()?;
        }
        for project in &self.projects {
            project.validate()?;
        }
        for risk in &self.risks {
            risk.validate()?;
        }
        Ok(())
    }
}
