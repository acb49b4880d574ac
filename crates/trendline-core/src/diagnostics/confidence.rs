//! Pointwise confidence band along the dense prediction grid.

use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::diagnostics::metrics::residual_standard_error;
use crate::errors::{AnalysisError, AnalysisResult};
use crate::types::ConfidenceBand;

/// Half-widths of the ± band at each grid point.
///
/// `SE(u) = s·√(1/n + (u − x̄)²/Sxx)` scaled by the two-sided t critical
/// value with `n − 2` degrees of freedom. The band is all-zero when the
/// sample is under-determined (`n ≤ 2`) or has no x spread (`Sxx = 0`).
pub fn confidence_band(
    x: &[f64],
    residuals: &[f64],
    x_line: &[f64],
    confidence_level: f64,
) -> AnalysisResult<ConfidenceBand> {
    if !(confidence_level > 0.0 && confidence_level < 1.0) {
        return Err(AnalysisError::InvalidConfig {
            field: "confidence_level",
            message: format!("{confidence_level} (must be in (0, 1))"),
        });
    }
    debug_assert_eq!(x.len(), residuals.len());

    let n = x.len();
    if n <= 2 {
        return Ok(ConfidenceBand {
            half_width: vec![0.0; x_line.len()],
        });
    }

    let x_mean = x.iter().sum::<f64>() / n as f64;
    let sxx: f64 = x.iter().map(|&xi| (xi - x_mean) * (xi - x_mean)).sum();
    if sxx == 0.0 {
        return Ok(ConfidenceBand {
            half_width: vec![0.0; x_line.len()],
        });
    }

    let s = residual_standard_error(residuals);
    let t = t_critical(confidence_level, n - 2);
    let n_f = n as f64;

    let half_width = x_line
        .iter()
        .map(|&u| {
            let d = u - x_mean;
            t * s * (1.0 / n_f + d * d / sxx).sqrt()
        })
        .collect();
    Ok(ConfidenceBand { half_width })
}

/// Two-sided critical value of the t-distribution.
///
/// Quantile at `(1 + confidence_level) / 2` with the given degrees of
/// freedom; NaN for a degenerate distribution.
pub fn t_critical(confidence_level: f64, df: usize) -> f64 {
    let t_dist = match StudentsT::new(0.0, 1.0, df as f64) {
        Ok(dist) => dist,
        Err(_) => return f64::NAN,
    };
    t_dist.inverse_cdf((1.0 + confidence_level) / 2.0)
}
