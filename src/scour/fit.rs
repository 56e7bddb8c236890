/// Agreement between measured and computed y2 over one series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitSummary {
    /// Pairs where both values are finite.
    pub points: usize,
    /// Pairs whose prediction is NaN or infinite.
    pub nan_predictions: usize,
    /// Root-mean-square error [m] over the finite pairs; NaN if there are none.
    pub rmse: f64,
    /// Mean of computed/measured over the finite pairs; NaN if there are none.
    pub mean_ratio: f64,
}

/// Summarize two aligned series. Extra elements of the longer one are ignored.
pub fn summarize(measured: &[f64], computed: &[f64]) -> FitSummary {
    let mut points = 0usize;
    let mut nan_predictions = 0usize;
    let mut sq_err = 0.0;
    let mut ratio_sum = 0.0;

    for (&m, &c) in measured.iter().zip(computed) {
        if !c.is_finite() {
            nan_predictions += 1;
            continue;
        }
        if !m.is_finite() {
            continue;
        }
        points += 1;
        sq_err += (c - m).powi(2);
        ratio_sum += c / m;
    }

    if points == 0 {
        return FitSummary {
            points,
            nan_predictions,
            rmse: f64::NAN,
            mean_ratio: f64::NAN,
        };
    }

    let n = points as f64;
    FitSummary {
        points,
        nan_predictions,
        rmse: (sq_err / n).sqrt(),
        mean_ratio: ratio_sum / n,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_agreement() {
        let s = summarize(&[0.1, 0.2, 0.3], &[0.1, 0.2, 0.3]);
        assert_eq!(s.points, 3);
        assert_eq!(s.rmse, 0.0);
        assert!((s.mean_ratio - 1.0).abs() < 1e-12);
    }

    #[test]
    fn nan_predictions_are_counted_and_skipped() {
        let s = summarize(&[0.1, 0.2, 0.4], &[0.2, f64::NAN, 0.2]);
        assert_eq!(s.points, 2);
        assert_eq!(s.nan_predictions, 1);
        // errors 0.1 and -0.2 → sqrt((0.01 + 0.04) / 2)
        assert!((s.rmse - 0.025f64.sqrt()).abs() < 1e-12);
        assert!((s.mean_ratio - 1.25).abs() < 1e-12);
    }

    #[test]
    fn empty_series_has_nan_statistics() {
        let s = summarize(&[], &[]);
        assert_eq!(s.points, 0);
        assert!(s.rmse.is_nan());
        assert!(s.mean_ratio.is_nan());
    }
}
