//! Live-bed contraction scour equations.
//!
//! Each equation predicts the depth ratio y2/y1 at the contracted reach from
//! the contraction ratio and, depending on the author, the bed shear or the
//! upstream Froude number. Evaluation is element-wise and never fails: an
//! argument outside an equation's domain produces NaN for that row only.
//!
//! References:
//! - Straub (1934)
//! - Komura (1966)
//! - Gill (1981)
//! - Lim & Cheng (1998)

use std::fmt;

use crate::config::PhysicalConstants;
use crate::hydraulics::HydraulicRow;

/// Per-row inputs of the equations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScourInputs {
    /// b2/b1.
    pub ratio_b2_b1: f64,
    pub tau: f64,
    pub tau_c: f64,
    pub y1: f64,
    /// Geometric standard deviation σg of the sediment.
    pub geom_std: f64,
    pub froude: f64,
    /// τ/τc.
    pub shear_ratio: f64,
}

impl ScourInputs {
    /// Rows without shear parameters (not live-bed) get NaN shear inputs.
    pub fn from_row(row: &HydraulicRow) -> Self {
        let (tau, tau_c, shear_ratio) = row
            .shear
            .map(|s| (s.tau, s.tau_c, s.ratio))
            .unwrap_or((f64::NAN, f64::NAN, f64::NAN));
        ScourInputs {
            ratio_b2_b1: row.measurement.ratio_b2_b1,
            tau,
            tau_c,
            y1: row.measurement.y1,
            geom_std: row.measurement.geom_std,
            froude: row.froude,
            shear_ratio,
        }
    }

    /// β = b1/b2, the inverse contraction ratio.
    pub fn beta(&self) -> f64 {
        1.0 / self.ratio_b2_b1
    }
}

// ---------------------------------------------------------------------------
// Equation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Equation {
    Straub1934,
    Komura1966,
    Gill1981,
    LimCheng1998,
}

impl Equation {
    /// Panel order of the comparison figure.
    pub const ALL: [Equation; 4] = [
        Equation::Straub1934,
        Equation::Komura1966,
        Equation::Gill1981,
        Equation::LimCheng1998,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Equation::Straub1934 => "Straub (1934)",
            Equation::Komura1966 => "Komura (1966)",
            Equation::Gill1981 => "Gill (1981)",
            Equation::LimCheng1998 => "Lim and Cheng (1998)",
        }
    }

    /// Predicted y2/y1 for one row.
    pub fn depth_ratio(self, x: &ScourInputs, c: &PhysicalConstants) -> f64 {
        let beta = x.beta();
        match self {
            Equation::Straub1934 => {
                let half = x.tau_c / (2.0 * x.tau);
                let root = (half.powi(2) + (1.0 - x.tau_c / x.tau) * beta).sqrt();
                beta.powf(6.0 / 7.0) * (half + root).powf(-3.0 / 7.0)
            }
            Equation::Komura1966 => {
                c.komura_coefficient
                    * x.froude.powf(1.0 / 5.0)
                    * beta.powf(2.0 / 3.0)
                    * x.geom_std.powf(-1.0 / 5.0)
            }
            Equation::Gill1981 => {
                let inv_r = 1.0 / x.shear_ratio;
                beta.powf(6.0 / 7.0)
                    * (beta.powf(1.0 / 3.0) * (1.0 - inv_r) + inv_r).powf(-3.0 / 7.0)
            }
            Equation::LimCheng1998 => beta.powf(0.75),
        }
    }

    /// Predicted y2 [m] for one row.
    pub fn predict_y2(self, x: &ScourInputs, c: &PhysicalConstants) -> f64 {
        self.depth_ratio(x, c) * x.y1
    }

    /// Predicted y2 for a batch, aligned with `inputs`.
    pub fn predict_batch(self, inputs: &[ScourInputs], c: &PhysicalConstants) -> Vec<f64> {
        inputs.iter().map(|x| self.predict_y2(x, c)).collect()
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.title())
    }
}

/// Evaluate all four equations over one batch. Each output vector has the
/// length and order of `inputs`.
pub fn evaluate_all(inputs: &[ScourInputs], c: &PhysicalConstants) -> [(Equation, Vec<f64>); 4] {
    Equation::ALL.map(|eq| (eq, eq.predict_batch(inputs, c)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-12 * b.abs().max(1.0)
    }

    fn inputs(ratio_b2_b1: f64) -> ScourInputs {
        ScourInputs {
            ratio_b2_b1,
            tau: 1.0,
            tau_c: 1.0,
            y1: 1.0,
            geom_std: 1.0,
            froude: 1.0,
            shear_ratio: 1.0,
        }
    }

    #[test]
    fn no_contraction_is_identity_for_shear_and_geometric_models() {
        let c = PhysicalConstants::default();
        let cases = [
            inputs(1.0),
            ScourInputs { tau: 2.0, tau_c: 0.7, shear_ratio: 2.0 / 0.7, y1: 0.3, ..inputs(1.0) },
            ScourInputs { tau: 5.0, tau_c: 1.0, shear_ratio: 5.0, y1: 0.12, ..inputs(1.0) },
        ];
        for x in cases {
            for eq in [Equation::Straub1934, Equation::Gill1981, Equation::LimCheng1998] {
                let r = eq.depth_ratio(&x, &c);
                assert!(close(r, 1.0), "{eq}: ratio {r}");
                assert!(close(eq.predict_y2(&x, &c), x.y1));
            }
        }
    }

    #[test]
    fn komura_without_contraction_keeps_froude_and_grading_terms() {
        let c = PhysicalConstants::default();
        let x = ScourInputs { froude: 0.32, geom_std: 1.8, ..inputs(1.0) };
        let expected = 1.45 * 0.32f64.powf(0.2) * 1.8f64.powf(-0.2);
        assert!(close(Equation::Komura1966.depth_ratio(&x, &c), expected));
    }

    #[test]
    fn synthetic_group_lim_cheng_and_komura() {
        let c = PhysicalConstants::default();
        let batch: Vec<ScourInputs> = [2.0, 1.0, 0.5].into_iter().map(inputs).collect();

        let lim = Equation::LimCheng1998.predict_batch(&batch, &c);
        let expected_lim = [0.5f64.powf(0.75), 1.0, 2.0f64.powf(0.75)];
        for (got, want) in lim.iter().zip(expected_lim) {
            assert!(close(*got, want), "{got} vs {want}");
        }

        let komura = Equation::Komura1966.predict_batch(&batch, &c);
        let expected_komura = [
            1.45 * 0.5f64.powf(2.0 / 3.0),
            1.45,
            1.45 * 2.0f64.powf(2.0 / 3.0),
        ];
        for (got, want) in komura.iter().zip(expected_komura) {
            assert!(close(*got, want), "{got} vs {want}");
        }
    }

    #[test]
    fn lim_cheng_ignores_shear_and_froude() {
        let c = PhysicalConstants::default();
        let base = ScourInputs { y1: 0.2, ..inputs(0.6) };
        let perturbed = ScourInputs {
            tau: 9.0,
            tau_c: 0.1,
            shear_ratio: 90.0,
            froude: 0.05,
            geom_std: 3.0,
            ..base
        };
        let a = Equation::LimCheng1998.predict_y2(&base, &c);
        let b = Equation::LimCheng1998.predict_y2(&perturbed, &c);
        assert_eq!(a, b);
        assert!(close(a, 0.2 * (1.0f64 / 0.6).powf(0.75)));
    }

    #[test]
    fn zero_tau_degrades_only_that_row_for_straub() {
        let c = PhysicalConstants::default();
        let batch = vec![
            ScourInputs { tau: 2.0, shear_ratio: 2.0, ..inputs(0.5) },
            ScourInputs { tau: 0.0, shear_ratio: 0.0, ..inputs(0.5) },
            ScourInputs { tau: 3.0, shear_ratio: 3.0, ..inputs(0.8) },
        ];
        let y2 = Equation::Straub1934.predict_batch(&batch, &c);
        assert_eq!(y2.len(), 3);
        assert!(y2[0].is_finite());
        assert!(y2[1].is_nan());
        assert!(y2[2].is_finite());
    }

    #[test]
    fn straub_negative_radicand_is_nan() {
        let c = PhysicalConstants::default();
        // τc/τ = 10 with strong contraction drives the radicand below zero.
        let x = ScourInputs { tau: 0.1, tau_c: 1.0, shear_ratio: 0.1, ..inputs(0.2) };
        assert!(Equation::Straub1934.depth_ratio(&x, &c).is_nan());
    }

    #[test]
    fn negative_froude_is_nan_for_komura() {
        let c = PhysicalConstants::default();
        let x = ScourInputs { froude: -0.4, ..inputs(0.5) };
        assert!(Equation::Komura1966.depth_ratio(&x, &c).is_nan());
    }

    #[test]
    fn zero_shear_ratio_is_nan_for_gill() {
        let c = PhysicalConstants::default();
        let x = ScourInputs { shear_ratio: 0.0, ..inputs(0.5) };
        assert!(Equation::Gill1981.depth_ratio(&x, &c).is_nan());
    }

    #[test]
    fn evaluate_all_keeps_panel_order_and_alignment() {
        let c = PhysicalConstants::default();
        let batch: Vec<ScourInputs> = [0.4, 0.7].into_iter().map(inputs).collect();
        let all = evaluate_all(&batch, &c);
        let order: Vec<Equation> = all.iter().map(|(eq, _)| *eq).collect();
        assert_eq!(order, Equation::ALL.to_vec());
        assert!(all.iter().all(|(_, ys)| ys.len() == 2));
    }
}
