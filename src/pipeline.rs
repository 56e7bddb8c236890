use std::collections::BTreeSet;

use crate::config::PhysicalConstants;
use crate::data::filter::select_regime;
use crate::data::model::{ContractionTable, ScourRegime, Study};
use crate::hydraulics::{derive_parameters, HydraulicRow};
use crate::scour::comparison::Comparison;
use crate::scour::equations::Equation;

/// Split the table by regime and derive the hydraulic parameters of each
/// subset. Rows of any other regime are ignored.
pub fn derive_subsets(
    table: &ContractionTable,
    c: &PhysicalConstants,
) -> (Vec<HydraulicRow>, Vec<HydraulicRow>) {
    let clear_water = derive_parameters(&select_regime(table, &ScourRegime::ClearWater), c);
    let live_bed = derive_parameters(&select_regime(table, &ScourRegime::LiveBed), c);

    let other = table.len() - clear_water.len() - live_bed.len();
    log::info!(
        "{} clear-water rows, {} live-bed rows",
        clear_water.len(),
        live_bed.len()
    );
    if other > 0 {
        log::warn!(
            "{other} rows have an unrecognized scour type and are ignored: {}",
            unknown_regimes(table).join(", ")
        );
    }
    (clear_water, live_bed)
}

/// Distinct scour-type labels other than clear-water and live-bed, sorted.
pub fn unknown_regimes(table: &ContractionTable) -> Vec<String> {
    table
        .rows
        .iter()
        .filter(|r| matches!(r.regime, ScourRegime::Other(_)))
        .map(|r| r.regime.to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Full compute stage: regime split, hydraulic parameters, and the
/// per-study equation evaluation of the live-bed subset.
pub fn build_comparison(table: &ContractionTable, c: &PhysicalConstants) -> Comparison {
    let (clear_water, live_bed) = derive_subsets(table, c);
    if let Some(max_fr) = clear_water
        .iter()
        .map(|r| r.froude)
        .filter(|f| f.is_finite())
        .reduce(f64::max)
    {
        log::debug!("clear-water upstream Froude number up to {max_fr:.3}");
    }

    let cmp = Comparison::build(&live_bed, c);
    if cmp.dropped_rows > 0 {
        log::warn!(
            "{} live-bed rows belong to no known study and are left out",
            cmp.dropped_rows
        );
    }
    cmp
}

/// Log how well each equation reproduces the measurements.
pub fn log_fit_summaries(cmp: &Comparison) {
    for eq in Equation::ALL {
        let s = cmp.equation_summary(eq);
        log::info!(
            "{eq:<22} n={:<4} NaN={:<3} RMSE={:.4} m  mean computed/measured={:.3}",
            s.points,
            s.nan_predictions,
            s.rmse,
            s.mean_ratio
        );
        if s.nan_predictions > 0 {
            log::warn!("{eq}: {} predictions are NaN and will not be plotted", s.nan_predictions);
        }
        for study in Study::ALL {
            let st = cmp.study_summary(study, eq);
            if st.points + st.nan_predictions == 0 {
                continue;
            }
            log::debug!(
                "  {study:<24} n={:<4} RMSE={:.4} ratio={:.3}",
                st.points,
                st.rmse,
                st.mean_ratio
            );
        }
    }
}
