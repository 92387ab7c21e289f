//! Calendar events derived from project date ranges.
//!
//! # Invariants
//! - Only projects with a `start_date` produce events.
//! - A missing or reversed `end_date` collapses to a point event at start.
//! - Output is sorted by start, then project id.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use serde::{Deserialize, Serialize};

/// Half-open time window `[from, to)` in Unix epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarWindow {
    pub from: i64,
    pub to: i64,
}

impl CalendarWindow {
    pub fn new(from: i64, to: i64) -> Self {
        Self { from, to }
    }

    /// Returns whether the closed span `[start, end]` overlaps this window.
    pub fn overlaps(&self, start: i64, end: i64) -> bool {
        start < self.to && end >= self.from
    }
}

/// One project span on the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub project_id: ProjectId,
    pub title: String,
    pub status: ProjectStatus,
    pub start: i64,
    pub end: i64,
}

/// Returns events for projects overlapping `window`.
pub fn calendar_events(projects: &[Project], window: CalendarWindow) -> Vec<CalendarEvent> {
    let mut events: Vec<CalendarEvent> = projects
        .iter()
        .filter_map(|project| {
            let start = project.start_date?;
            let end = project.end_date.filter(|end| *end >= start).unwrap_or(start);
            window.overlaps(start, end).then(|| CalendarEvent {
                project_id: project.id.clone(),
                title: project.name.clone(),
                status: project.status,
                start,
                end,
            })
        })
        .collect();
    events.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.project_id.cmp(&b.project_id)));
    events
}

#[cfg(test)]
mod tests {
    use super::{calendar_events, CalendarWindow};
    use crate::model::project::Project;

    fn dated(id: &str, start: Option<i64>, end: Option<i64>) -> Project {
        let mut project = Project::with_id(id, id.to_uppercase());
        project.start_date = start;
        project.end_date = end;
        project
    }

    #[test]
    fn window_overlap_is_half_open() {
        let window = CalendarWindow::new(100, 200);
        assert!(window.overlaps(50, 100));
        assert!(window.overlaps(199, 300));
        assert!(!window.overlaps(200, 300));
        assert!(!window.overlaps(10, 99));
    }

    #[test]
    fn events_are_filtered_and_sorted() {
        let projects = vec![
            dated("c", Some(150), Some(400)),
            dated("a", Some(120), None),
            dated("b", Some(120), Some(90)),
            dated("undated", None, Some(150)),
            dated("late", Some(500), Some(600)),
        ];

        let events = calendar_events(&projects, CalendarWindow::new(100, 200));

        let ids: Vec<_> = events.iter().map(|e| e.project_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(events[1].end, 120);
        assert_eq!(events[2].end, 400);
    }
}
