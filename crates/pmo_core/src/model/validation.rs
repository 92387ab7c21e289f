//! Write-side validation errors shared by model records.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation failures raised before a record is persisted.
///
/// View computations never raise these; they tolerate malformed input.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Identifier is blank after trim.
    BlankId,
    /// Display name is blank after trim.
    BlankName { id: String },
    /// Capacity is negative or not finite.
    InvalidCapacity { id: String, capacity: f64 },
    /// Allocated hours are negative or not finite.
    InvalidHours {
        project_id: String,
        resource_id: String,
        hours: f64,
    },
    /// Allocation has a blank resource reference.
    BlankResourceRef { project_id: String },
    /// `end_date` is earlier than `start_date`.
    InvalidDateRange { id: String, start: i64, end: i64 },
    /// Probability or impact is outside `1..=5`.
    InvalidRiskScale {
        id: String,
        probability: u8,
        impact: u8,
    },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankId => write!(f, "id must not be blank"),
            Self::BlankName { id } => write!(f, "name must not be blank (id `{id}`)"),
            Self::InvalidCapacity { id, capacity } => write!(
                f,
                "capacity ({capacity}) must be a finite non-negative number (resource `{id}`)"
            ),
            Self::InvalidHours {
                project_id,
                resource_id,
                hours,
            } => write!(
                f,
                "hours ({hours}) must be a finite non-negative number (project `{project_id}`, resource `{resource_id}`)"
            ),
            Self::BlankResourceRef { project_id } => {
                write!(f, "allocation resource_id must not be blank (project `{project_id}`)")
            }
            Self::InvalidDateRange { id, start, end } => write!(
                f,
                "end_date ({end}) must be >= start_date ({start}) (project `{id}`)"
            ),
            Self::InvalidRiskScale {
                id,
                probability,
                impact,
            } => write!(
                f,
                "probability ({probability}) and impact ({impact}) must be within 1..=5 (risk `{id}`)"
            ),
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn ensure_id(id: &str) -> Result<(), ValidationError> {
    if id.trim().is_empty() {
        return Err(ValidationError::BlankId);
    }
    Ok(())
}

pub(crate) fn ensure_name(id: &str, name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::BlankName { id: id.to_string() });
    }
    Ok(())
}
