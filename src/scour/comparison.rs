use std::collections::BTreeMap;

use crate::config::PhysicalConstants;
use crate::data::model::Study;
use crate::hydraulics::HydraulicRow;

use super::equations::{evaluate_all, Equation, ScourInputs};
use super::fit::{summarize, FitSummary};

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

/// Partition rows by study, keeping file order inside each group. Every known
/// study gets an entry (possibly empty). Rows with an unrecognized label are
/// dropped; their count is returned alongside.
pub fn group_by_study(rows: &[HydraulicRow]) -> (BTreeMap<Study, Vec<&HydraulicRow>>, usize) {
    let mut grouped: BTreeMap<Study, Vec<&HydraulicRow>> =
        Study::ALL.into_iter().map(|s| (s, Vec::new())).collect();
    let mut dropped = 0;

    for row in rows {
        match row.measurement.study.study() {
            Some(study) => grouped.entry(study).or_default().push(row),
            None => dropped += 1,
        }
    }

    (grouped, dropped)
}

// ---------------------------------------------------------------------------
// Comparison – measured vs. computed y2 per (study, equation)
// ---------------------------------------------------------------------------

/// Measured y2 per study and predicted y2 per (study, equation). For a given
/// study every predicted series is aligned with the measured one.
#[derive(Debug, Clone, Default)]
pub struct Comparison {
    measured: BTreeMap<Study, Vec<f64>>,
    computed: BTreeMap<(Study, Equation), Vec<f64>>,
    /// Live-bed rows left out because their study label is unknown.
    pub dropped_rows: usize,
}

impl Comparison {
    /// Evaluate every equation on every study group of the live-bed rows.
    pub fn build(live_bed: &[HydraulicRow], c: &PhysicalConstants) -> Self {
        let (groups, dropped_rows) = group_by_study(live_bed);
        let mut measured = BTreeMap::new();
        let mut computed = BTreeMap::new();

        for (study, rows) in groups {
            let inputs: Vec<ScourInputs> = rows.iter().map(|r| ScourInputs::from_row(r)).collect();
            for (eq, predicted) in evaluate_all(&inputs, c) {
                computed.insert((study, eq), predicted);
            }
            measured.insert(study, rows.iter().map(|r| r.measurement.y2).collect());
        }

        Comparison {
            measured,
            computed,
            dropped_rows,
        }
    }

    /// Measured y2 of one study; empty if the study has no rows.
    pub fn measured(&self, study: Study) -> &[f64] {
        self.measured.get(&study).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Predicted y2 of one study under one equation.
    pub fn computed(&self, study: Study, eq: Equation) -> &[f64] {
        self.computed.get(&(study, eq)).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `(measured, computed)` pairs of one panel series, in row order.
    pub fn pairs(&self, study: Study, eq: Equation) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.measured(study)
            .iter()
            .copied()
            .zip(self.computed(study, eq).iter().copied())
    }

    /// Total number of rows that made it into a study group.
    pub fn row_count(&self) -> usize {
        self.measured.values().map(Vec::len).sum()
    }

    pub fn study_summary(&self, study: Study, eq: Equation) -> FitSummary {
        summarize(self.measured(study), self.computed(study, eq))
    }

    /// Summary of one equation over all studies pooled.
    pub fn equation_summary(&self, eq: Equation) -> FitSummary {
        let (measured, computed): (Vec<f64>, Vec<f64>) =
            Study::ALL.into_iter().flat_map(|s| self.pairs(s, eq)).unzip();
        summarize(&measured, &computed)
    }
}
