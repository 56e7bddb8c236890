//! Hydraulic parameters derived from the raw measurements.
//!
//! Every function here is total over `f64`: a depth or grain size outside its
//! physical domain yields NaN for that row instead of an error, and the NaN
//! flows on into the scour equations untouched.

use crate::config::PhysicalConstants;
use crate::data::model::{MeasurementRow, ScourRegime};

/// Upstream Froude number `u1 / sqrt(g·y1)`. NaN when `y1 <= 0`.
pub fn froude_number(u1: f64, y1: f64, gravity: f64) -> f64 {
    if y1 <= 0.0 {
        return f64::NAN;
    }
    u1 / (gravity * y1).sqrt()
}

/// Bed shear stress from the Manning–Strickler friction law [Pa]:
///
/// τ = ρ·g·u1²·d50^(1/3) / (K²·y1^(1/3)), with d50 in metres.
pub fn bed_shear_stress(u1: f64, y1: f64, d50_m: f64, c: &PhysicalConstants) -> f64 {
    if y1 <= 0.0 || d50_m <= 0.0 {
        return f64::NAN;
    }
    c.water_density * c.gravity * u1.powi(2) * d50_m.powf(1.0 / 3.0)
        / (c.strickler.powi(2) * y1.powf(1.0 / 3.0))
}

/// Critical shear stress from the Shields criterion [Pa]:
///
/// τc = θc·ρ·g·d50·(s − 1)
pub fn critical_shear_stress(d50_m: f64, specific_density: f64, c: &PhysicalConstants) -> f64 {
    if d50_m <= 0.0 {
        return f64::NAN;
    }
    c.critical_shields * c.water_density * c.gravity * d50_m * (specific_density - 1.0)
}

/// τ/τc. A zero critical stress has no meaningful ratio and yields NaN.
pub fn shear_ratio(tau: f64, tau_c: f64) -> f64 {
    if tau_c == 0.0 {
        return f64::NAN;
    }
    tau / tau_c
}

/// Bed shear parameters of a live-bed row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShearStress {
    pub tau: f64,
    pub tau_c: f64,
    /// τ/τc.
    pub ratio: f64,
}

impl ShearStress {
    pub fn from_row(row: &MeasurementRow, c: &PhysicalConstants) -> Self {
        let d50_m = row.d50_mm / 1000.0;
        let tau = bed_shear_stress(row.u1, row.y1, d50_m, c);
        let tau_c = critical_shear_stress(d50_m, row.specific_density, c);
        ShearStress {
            tau,
            tau_c,
            ratio: shear_ratio(tau, tau_c),
        }
    }
}

/// A measurement together with its derived parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct HydraulicRow {
    pub measurement: MeasurementRow,
    pub froude: f64,
    /// Only computed for live-bed rows.
    pub shear: Option<ShearStress>,
}

/// Augment the rows of one regime with their hydraulic parameters. The
/// Froude number is always derived; shear stresses only for live-bed rows.
pub fn derive_parameters(rows: &[MeasurementRow], c: &PhysicalConstants) -> Vec<HydraulicRow> {
    rows.iter()
        .map(|row| HydraulicRow {
            measurement: row.clone(),
            froude: froude_number(row.u1, row.y1, c.gravity),
            shear: (row.regime == ScourRegime::LiveBed).then(|| ShearStress::from_row(row, c)),
        })
        .collect()
}
