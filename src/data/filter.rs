use super::model::{ContractionTable, MeasurementRow, ScourRegime};

// ---------------------------------------------------------------------------
// Regime selection
// ---------------------------------------------------------------------------

/// Return indices of rows whose "Type of scour" equals `regime`.
/// Rows with an unrecognized regime never match `ClearWater` or `LiveBed`.
pub fn regime_indices(table: &ContractionTable, regime: &ScourRegime) -> Vec<usize> {
    table
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| row.regime == *regime)
        .map(|(i, _)| i)
        .collect()
}

/// Copy out the rows of one regime, preserving file order.
pub fn select_regime(table: &ContractionTable, regime: &ScourRegime) -> Vec<MeasurementRow> {
    regime_indices(table, regime)
        .into_iter()
        .map(|i| table.rows[i].clone())
        .collect()
}
