//! Risk domain model.
//!
//! # Invariants
//! - Persisted risks have `probability` and `impact` within `1..=5`.

use super::project::ProjectId;
use super::validation::{ensure_id, ensure_name, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lowest value on the probability/impact scale.
pub const RISK_SCALE_MIN: u8 = 1;
/// Highest value on the probability/impact scale.
pub const RISK_SCALE_MAX: u8 = 5;

/// Risk lifecycle label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskStatus {
    #[default]
    Open,
    Mitigated,
    Closed,
}

impl RiskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Mitigated => "mitigated",
            Self::Closed => "closed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "open" => Some(Self::Open),
            "mitigated" => Some(Self::Mitigated),
            "closed" => Some(Self::Closed),
            _ => None,
        }
    }
}

/// Risk register entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Risk {
    pub id: String,
    pub title: String,
    #[serde(default, alias = "projectId")]
    pub project_id: Option<ProjectId>,
    pub probability: u8,
    pub impact: u8,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub status: RiskStatus,
}

impl Risk {
    /// Creates an open risk with a generated stable ID.
    pub fn new(title: impl Into<String>, probability: u8, impact: u8) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), title, probability, impact)
    }

    /// Creates an open risk with a caller-provided ID.
    pub fn with_id(id: impl Into<String>, title: impl Into<String>, probability: u8, impact: u8) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            project_id: None,
            probability,
            impact,
            status: RiskStatus::Open,
        }
    }

    /// Returns whether probability and impact both sit on the 1..=5 scale.
    pub fn is_on_scale(&self) -> bool {
        let scale = RISK_SCALE_MIN..=RISK_SCALE_MAX;
        scale.contains(&self.probability) && scale.contains(&self.impact)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_id(&self.id)?;
        ensure_name(&self.id, &self.title)?;
        if !self.is_on_scale() {
            return Err(ValidationError::InvalidRiskScale {
                id: self.id.clone(),
                probability: self.probability,
                impact: self.impact,
            });
        }
        Ok(())
    }
}
