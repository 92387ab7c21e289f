//! Project and allocation domain model.
//!
//! # Responsibility
//! - Define projects and the hours they commit from resources.
//!
//! # Invariants
//! - `Allocation::resource_id` is a weak reference; it may not resolve.
//! - `end_date` should not be earlier than `start_date` when both are set.

use super::resource::ResourceId;
use super::validation::{ensure_id, ensure_name, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a project.
pub type ProjectId = String;

/// Project lifecycle label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Scoped but not started.
    #[default]
    Planning,
    /// Work is in progress.
    Active,
    /// Paused.
    OnHold,
    /// Delivered.
    Completed,
    /// Abandoned.
    Cancelled,
}

impl ProjectStatus {
    /// Stable storage/display label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Planning => "planning",
            Self::Active => "active",
            Self::OnHold => "on_hold",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parses a storage label.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "planning" => Some(Self::Planning),
            "active" => Some(Self::Active),
            "on_hold" => Some(Self::OnHold),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

/// Commitment of one resource's hours to a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// Accepts `resourceId` as emitted by the hosted backend.
    #[serde(alias = "resourceId")]
    pub resource_id: ResourceId,
    /// Missing or `null` values deserialize to `0`.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub hours: f64,
}

impl Allocation {
    pub fn new(resource_id: impl Into<ResourceId>, hours: f64) -> Self {
        Self {
            resource_id: resource_id.into(),
            hours,
        }
    }

    /// Hours usable for aggregation; negative or non-finite values count as zero.
    pub fn effective_hours(&self) -> f64 {
        if self.hours.is_finite() && self.hours > 0.0 {
            self.hours
        } else {
            0.0
        }
    }
}

/// Project record with its resource allocations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub status: ProjectStatus,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub allocations: Vec<Allocation>,
    /// Unix epoch milliseconds.
    #[serde(default, alias = "startDate")]
    pub start_date: Option<i64>,
    /// Unix epoch milliseconds. Should be >= `start_date` when set.
    #[serde(default, alias = "endDate")]
    pub end_date: Option<i64>,
}

impl Project {
    /// Creates a project with a generated stable ID and no allocations.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), name)
    }

    /// Creates a project with a caller-provided ID and no allocations.
    pub fn with_id(id: impl Into<ProjectId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: ProjectStatus::default(),
            allocations: Vec::new(),
            start_date: None,
            end_date: None,
        }
    }

    /// Appends an allocation, builder style.
    pub fn allocate(mut self, resource_id: impl Into<ResourceId>, hours: f64) -> Self {
        self.allocations.push(Allocation::new(resource_id, hours));
        self
    }

    /// Validates write-side invariants, including every allocation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_id(&self.id)?;
        ensure_name(&self.id, &self.name)?;

        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end < start {
                return Err(ValidationError::InvalidDateRange {
                    id: self.id.clone(),
                    start,
                    end,
                });
            }
        }

        for allocation in &self.allocations {
            if allocation.resource_id.trim().is_empty() {
                return Err(ValidationError::BlankResourceRef {
                    project_id: self.id.clone(),
                });
            }
            if !allocation.hours.is_finite() || allocation.hours < 0.0 {
                return Err(ValidationError::InvalidHours {
                    project_id: self.id.clone(),
                    resource_id: allocation.resource_id.clone(),
                    hours: allocation.hours,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Allocation, Project, ProjectStatus};
    use crate::model::validation::ValidationError;

    #[test]
    fn effective_hours_clamps_invalid_values_to_zero() {
        assert_eq!(Allocation::new("r1", 12.5).effective_hours(), 12.5);
        assert_eq!(Allocation::new("r1", -3.0).effective_hours(), 0.0);
        assert_eq!(Allocation::new("r1", f64::INFINITY).effective_hours(), 0.0);
        assert_eq!(Allocation::new("r1", f64::NAN).effective_hours(), 0.0);
    }

    #[test]
    fn status_labels_parse_back() {
        for status in [
            ProjectStatus::Planning,
            ProjectStatus::Active,
            ProjectStatus::OnHold,
            ProjectStatus::Completed,
            ProjectStatus::Cancelled,
        ] {
            assert_eq!(ProjectStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(ProjectStatus::parse("archived"), None);
    }

    #[test]
    fn validate_rejects_negative_hours() {
        let project = Project::with_id("p1", "Alpha").allocate("r1", -1.0);
        let err = project.validate().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidHours { hours, .. } if hours == -1.0));
    }

    #[test]
    fn validate_rejects_reversed_dates() {
        let mut project = Project::with_id("p1", "Alpha");
        project.start_date = Some(200);
        project.end_date = Some(100);
        assert_eq!(
            project.validate().unwrap_err(),
            ValidationError::InvalidDateRange {
                id: "p1".to_string(),
                start: 200,
                end: 100,
            }
        );
    }
}
