//! 5x5 probability/impact risk heat map.
//!
//! # Invariants
//! - Closed risks are never placed.
//! - Risks off the 1..=5 scale are skipped and counted, never placed.
//! - Cell risk ids keep input order.

use crate::model::risk::{Risk, RiskStatus, RISK_SCALE_MAX};
use serde::{Deserialize, Serialize};

/// Minimum `probability * impact` score colored as high severity.
pub const HIGH_SEVERITY_SCORE: u8 = 15;
/// Minimum `probability * impact` score colored as medium severity.
pub const MEDIUM_SEVERITY_SCORE: u8 = 6;

/// Heat-map coloring for one matrix cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskSeverity {
    Low,
    Medium,
    High,
}

impl RiskSeverity {
    /// Classifies a cell by `probability * impact`.
    pub fn from_score(score: u8) -> Self {
        if score >= HIGH_SEVERITY_SCORE {
            Self::High
        } else if score >= MEDIUM_SEVERITY_SCORE {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// One cell of the heat map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskCell {
    pub probability: u8,
    pub impact: u8,
    pub severity: RiskSeverity,
    pub risk_ids: Vec<String>,
}

/// Probability x impact grid of non-closed risks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskMatrix {
    /// Row-major: `cells[probability - 1][impact - 1]`.
    cells: Vec<Vec<RiskCell>>,
    /// Non-closed risks dropped for being off the 1..=5 scale.
    pub skipped: usize,
}

impl RiskMatrix {
    fn empty() -> Self {
        let cells = (1..=RISK_SCALE_MAX)
            .map(|probability| {
                (1..=RISK_SCALE_MAX)
                    .map(|impact| RiskCell {
                        probability,
                        impact,
                        severity: RiskSeverity::from_score(probability * impact),
                        risk_ids: Vec::new(),
                    })
                    .collect()
            })
            .collect();
        Self { cells, skipped: 0 }
    }

    /// Returns the cell at 1-based `(probability, impact)`, or `None` off-scale.
    pub fn cell(&self, probability: u8, impact: u8) -> Option<&RiskCell> {
        let row = usize::from(probability).checked_sub(1)?;
        let column = usize::from(impact).checked_sub(1)?;
        self.cells.get(row)?.get(column)
    }

    /// Iterates rows from probability 1 to 5.
    pub fn rows(&self) -> impl Iterator<Item = &[RiskCell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Number of risks placed on the grid.
    pub fn placed(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .map(|cell| cell.risk_ids.len())
            .sum()
    }
}

/// Places every non-closed, on-scale risk into its grid cell.
pub fn build_risk_matrix(risks: &[Risk]) -> RiskMatrix {
    let mut matrix = RiskMatrix::empty();
    for risk in risks {
        if risk.status == RiskStatus::Closed {
            continue;
        }
        if !risk.is_on_scale() {
            matrix.skipped += 1;
            continue;
        }
        let row = usize::from(risk.probability) - 1;
        let column = usize::from(risk.impact) - 1;
        matrix.cells[row][column].risk_ids.push(risk.id.clone());
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::{build_risk_matrix, RiskSeverity, HIGH_SEVERITY_SCORE, MEDIUM_SEVERITY_SCORE};
    use crate::model::risk::{Risk, RiskStatus};

    #[test]
    fn severity_thresholds() {
        assert_eq!(RiskSeverity::from_score(25), RiskSeverity::High);
        assert_eq!(RiskSeverity::from_score(15), RiskSeverity::High);
        assert_eq!(RiskSeverity::from_score(12), RiskSeverity::Medium);
        assert_eq!(RiskSeverity::from_score(6), RiskSeverity::Medium);
        assert_eq!(RiskSeverity::from_score(5), RiskSeverity::Low);
        assert_eq!(
            RiskSeverity::from_score(HIGH_SEVERITY_SCORE - 1),
            RiskSeverity::Medium
        );
        assert_eq!(
            RiskSeverity::from_score(MEDIUM_SEVERITY_SCORE - 1),
            RiskSeverity::Low
        );
    }

    #[test]
    fn places_open_risks_and_skips_off_scale() {
        let mut closed = Risk::with_id("k3", "closed", 5, 5);
        closed.status = RiskStatus::Closed;
        let risks = vec![
            Risk::with_id("k1", "vendor slip", 4, 5),
            Risk::with_id("k2", "scope creep", 4, 5),
            closed,
            Risk::with_id("k4", "bad", 0, 3),
            Risk::with_id("k5", "bad", 2, 6),
        ];

        let matrix = build_risk_matrix(&risks);

        let cell = matrix.cell(4, 5).unwrap();
        assert_eq!(cell.risk_ids, vec!["k1".to_string(), "k2".to_string()]);
        assert_eq!(cell.severity, RiskSeverity::High);
        assert!(matrix.cell(5, 5).unwrap().risk_ids.is_empty());
        assert_eq!(matrix.skipped, 2);
        assert_eq!(matrix.placed(), 2);
        assert!(matrix.cell(0, 1).is_none());
        assert!(matrix.cell(6, 1).is_none());
    }

    #[test]
    fn grid_is_five_by_five() {
        let matrix = build_risk_matrix(&[]);
        let rows: Vec<_> = matrix.rows().collect();
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|row| row.len() == 5));
        assert_eq!(rows[2][3].probability, 3);
        assert_eq!(rows[2][3].impact, 4);
    }
}
