//! Plain-text rendering of dashboard views.

use pmo_core::{CalendarEvent, LoadSummary, Resource, RiskMatrix, RiskSeverity};

const IDLE_PLACEHOLDER: &str = "available";

/// One line per resource: name, hours/capacity, load, band, projects.
pub fn render_loads(resources: &[Resource], summaries: &[LoadSummary]) -> String {
    let mut out = String::new();
    for (resource, summary) in resources.iter().zip(summaries) {
        let load = summary
            .load_percentage
            .map_or_else(|| "--".to_string(), |percent| format!("{percent}%"));
        let projects = if summary.project_labels.is_empty() {
            IDLE_PLACEHOLDER.to_string()
        } else {
            summary.project_labels.join(", ")
        };
        out.push_str(&format!(
            "{:<4} {:<24} {:>6}/{:<6} {:>6} {:<10} {}\n",
            resource.avatar,
            resource.name,
            summary.total_hours,
            resource.capacity,
            load,
            summary.band.as_str(),
            projects
        ));
    }
    out
}

/// Grid with probability rows 5 down to 1 and impact columns 1 to 5.
pub fn render_risk_matrix(matrix: &RiskMatrix) -> String {
    let mut out = String::from("P\\I      1      2      3      4      5\n");
    let rows: Vec<_> = matrix.rows().collect();
    for row in rows.iter().rev() {
        let probability = row.first().map_or(0, |cell| cell.probability);
        out.push_str(&format!("{probability:<3}"));
        for cell in row.iter() {
            out.push_str(&format!(
                " {}{:<4}",
                severity_marker(cell.severity),
                cell.risk_ids.len()
            ));
        }
        out.push('\n');
    }
    if matrix.skipped > 0 {
        out.push_str(&format!("skipped: {}\n", matrix.skipped));
    }
    out
}

pub fn render_calendar(events: &[CalendarEvent]) -> String {
    events
        .iter()
        .map(|event| {
            format!(
                "{}..{} {} [{}]\n",
                event.start,
                event.end,
                event.title,
                event.status.as_str()
            )
        })
        .collect()
}

fn severity_marker(severity: RiskSeverity) -> char {
    match severity {
        RiskSeverity::Low => '.',
        RiskSeverity::Medium => '+',
        RiskSeverity::High => '!',
    }
}
