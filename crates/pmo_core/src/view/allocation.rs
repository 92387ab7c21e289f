//! Resource allocation load aggregation.
//!
//! # Responsibility
//! - Sum allocated hours per resource across all projects.
//! - Derive load percentage and display band per resource.
//!
//! # Invariants
//! - Output has exactly one entry per input resource, in input order.
//! - Allocations referencing unknown resources contribute to no summary.
//! - Band thresholds are fixed at 80 and 100 percent.

use crate::model::project::Project;
use crate::model::resource::{Resource, ResourceId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Load percentage above which a resource is in the warning band.
pub const WARNING_THRESHOLD_PERCENT: u32 = 80;
/// Load percentage above which a resource is in the critical band.
pub const CRITICAL_THRESHOLD_PERCENT: u32 = 100;

/// Display classification of a resource's load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadBand {
    Normal,
    Warning,
    Critical,
    /// Capacity is zero, negative or not finite; no percentage exists.
    Unassigned,
}

impl LoadBand {
    /// Classifies a load percentage.
    pub fn from_percentage(percentage: u32) -> Self {
        if percentage > CRITICAL_THRESHOLD_PERCENT {
            Self::Critical
        } else if percentage > WARNING_THRESHOLD_PERCENT {
            Self::Warning
        } else {
            Self::Normal
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Warning => "warning",
            Self::Critical => "critical",
            Self::Unassigned => "unassigned",
        }
    }
}

/// Derived per-resource load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadSummary {
    pub resource_id: ResourceId,
    pub total_hours: f64,
    /// `None` when the resource has no usable capacity.
    pub load_percentage: Option<u32>,
    /// `"<project name> (<hours>h)"` per contributing allocation.
    pub project_labels: Vec<String>,
    pub band: LoadBand,
}

/// Resources paired with their load summaries, both from one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceLoadView {
    pub resources: Vec<Resource>,
    /// `summaries[i]` belongs to `resources[i]`.
    pub summaries: Vec<LoadSummary>,
}

/// Allocation whose resource reference did not resolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnresolvedAllocation {
    pub project_id: String,
    pub resource_id: ResourceId,
    pub hours: f64,
}

/// Computes one load summary per resource, preserving resource order.
///
/// Resources sharing an identifier each receive that identifier's
/// allocations.
pub fn compute_load_summaries(resources: &[Resource], projects: &[Project]) -> Vec<LoadSummary> {
    let index = index_by_id(resources);
    let mut totals = vec![0.0_f64; resources.len()];
    let mut labels: Vec<Vec<String>> = vec![Vec::new(); resources.len()];

    for project in projects {
        for allocation in &project.allocations {
            let Some(positions) = index.get(allocation.resource_id.as_str()) else {
                continue;
            };
            let hours = allocation.effective_hours();
            for &position in positions {
                totals[position] += hours;
                labels[position].push(project_label(&project.name, hours));
            }
        }
    }

    resources
        .iter()
        .zip(totals)
        .zip(labels)
        .map(|((resource, total_hours), project_labels)| {
            let load_percentage = load_percentage(total_hours, resource);
            let band = load_percentage.map_or(LoadBand::Unassigned, LoadBand::from_percentage);
            LoadSummary {
                resource_id: resource.id.clone(),
                total_hours,
                load_percentage,
                project_labels,
                band,
            }
        })
        .collect()
}

/// Lists allocations whose resource reference resolves to no resource.
pub fn unresolved_allocations(
    resources: &[Resource],
    projects: &[Project],
) -> Vec<UnresolvedAllocation> {
    let index = index_by_id(resources);
    projects
        .iter()
        .flat_map(|project| {
            project
                .allocations
                .iter()
                .filter(|allocation| !index.contains_key(allocation.resource_id.as_str()))
                .map(|allocation| UnresolvedAllocation {
                    project_id: project.id.clone(),
                    resource_id: allocation.resource_id.clone(),
                    hours: allocation.hours,
                })
        })
        .collect()
}

fn index_by_id(resources: &[Resource]) -> HashMap<&str, Vec<usize>> {
    let mut index: HashMap<&str, Vec<usize>> = HashMap::with_capacity(resources.len());
    for (position, resource) in resources.iter().enumerate() {
        index.entry(resource.id.as_str()).or_default().push(position);
    }
    index
}

fn load_percentage(total_hours: f64, resource: &Resource) -> Option<u32> {
    if !resource.has_usable_capacity() {
        return None;
    }
    // Float-to-int `as` saturates, so absurd loads pin to u32::MAX.
    Some((total_hours / resource.capacity * 100.0).round() as u32)
}

fn project_label(project_name: &str, hours: f64) -> String {
    format!("{project_name} ({hours}h)")
}

#[cfg(test)]
mod tests {
    use super::{load_percentage, project_label, LoadBand};
    use crate::model::resource::Resource;

    #[test]
    fn band_boundaries() {
        assert_eq!(LoadBand::from_percentage(101), LoadBand::Critical);
        assert_eq!(LoadBand::from_percentage(100), LoadBand::Warning);
        assert_eq!(LoadBand::from_percentage(81), LoadBand::Warning);
        assert_eq!(LoadBand::from_percentage(80), LoadBand::Normal);
        assert_eq!(LoadBand::from_percentage(0), LoadBand::Normal);
    }

    #[test]
    fn percentage_rounds_half_up() {
        let resource = Resource::with_id("r1", "A", "dev", 8.0);
        // 1 / 8 = 12.5%
        assert_eq!(load_percentage(1.0, &resource), Some(13));
        assert_eq!(load_percentage(0.0, &resource), Some(0));
    }

    #[test]
    fn percentage_is_absent_without_capacity() {
        let resource = Resource::with_id("r1", "A", "dev", 0.0);
        assert_eq!(load_percentage(10.0, &resource), None);
    }

    #[test]
    fn labels_drop_trailing_zero_fraction() {
        assert_eq!(project_label("Alpha", 30.0), "Alpha (30h)");
        assert_eq!(project_label("Beta", 7.5), "Beta (7.5h)");
    }
}
