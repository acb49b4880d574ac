//! Binned standard-deviation bars and per-point standard-error bars.

use crate::diagnostics::metrics::residual_standard_error;
use crate::errors::{AnalysisError, AnalysisResult};
use crate::types::{BinnedStdBars, ErrorBarMode, ErrorBars, FitConfig};

/// Equal-count bins along sorted x, each reporting the spread of its
/// residuals.
///
/// Uses `k = min(bin_count, ⌊n/5⌋)` bins of `⌊n/k⌋` elements (the last bin
/// absorbs the remainder); bins with a single element are skipped. Returns
/// empty sequences when `k ≤ 1` — too little data is an absent result, not
/// an error.
pub fn binned_std_bars(
    x: &[f64],
    y: &[f64],
    residuals: &[f64],
    bin_count: usize,
) -> AnalysisResult<BinnedStdBars> {
    if bin_count < 1 {
        return Err(AnalysisError::InvalidConfig {
            field: "sd_bin_count",
            message: format!("{bin_count} (must be >= 1)"),
        });
    }
    debug_assert_eq!(x.len(), y.len());
    debug_assert_eq!(x.len(), residuals.len());

    let n = x.len();
    let k = bin_count.min(n / 5);
    if k <= 1 {
        return Ok(BinnedStdBars::default());
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| x[a].partial_cmp(&x[b]).unwrap_or(std::cmp::Ordering::Equal));

    let bin_size = n / k;
    let mut bars = BinnedStdBars::default();
    for bin in 0..k {
        let start = bin * bin_size;
        let end = if bin + 1 == k { n } else { start + bin_size };
        let members = &order[start..end];
        if members.len() <= 1 {
            continue;
        }

        let m = members.len() as f64;
        let x_center = members.iter().map(|&i| x[i]).sum::<f64>() / m;
        let y_center = members.iter().map(|&i| y[i]).sum::<f64>() / m;
        let r_mean = members.iter().map(|&i| residuals[i]).sum::<f64>() / m;
        let variance = members
            .iter()
            .map(|&i| {
                let d = residuals[i] - r_mean;
                d * d
            })
            .sum::<f64>()
            / m;

        bars.x_centers.push(x_center);
        bars.y_centers.push(y_center);
        bars.y_errors.push(variance.sqrt());
    }
    Ok(bars)
}

/// Standard error of the fitted mean at each original point:
/// `SE(xᵢ) = s·√(1/n + (xᵢ − x̄)²/Sxx)`.
///
/// Zeros when `n ≤ 2` or all x coincide.
pub fn per_point_se_bars(x: &[f64], residuals: &[f64]) -> Vec<f64> {
    debug_assert_eq!(x.len(), residuals.len());

    let n = x.len();
    if n <= 2 {
        return vec![0.0; n];
    }

    let x_mean = x.iter().sum::<f64>() / n as f64;
    let sxx: f64 = x.iter().map(|&xi| (xi - x_mean) * (xi - x_mean)).sum();
    if sxx == 0.0 {
        return vec![0.0; n];
    }

    let s = residual_standard_error(residuals);
    let n_f = n as f64;
    x.iter()
        .map(|&xi| {
            let d = xi - x_mean;
            s * (1.0 / n_f + d * d / sxx).sqrt()
        })
        .collect()
}

/// Derive the error bars selected by the host's mode.
pub fn error_bars(
    mode: ErrorBarMode,
    x: &[f64],
    y: &[f64],
    residuals: &[f64],
    config: &FitConfig,
) -> AnalysisResult<ErrorBars> {
    match mode {
        ErrorBarMode::None => Ok(ErrorBars::None),
        ErrorBarMode::StandardDeviation => Ok(ErrorBars::Binned(binned_std_bars(
            x,
            y,
            residuals,
            config.sd_bin_count,
        )?)),
        ErrorBarMode::StandardError => Ok(ErrorBars::PerPoint(per_point_se_bars(x, residuals))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_too_few_points_gives_empty_bars() {
        // n/5 = 1 bin: absent result rather than an error.
        let x: Vec<f64> = (0..9).map(|i| i as f64).collect();
        let y = x.clone();
        let r = vec![0.0; 9];
        let bars = binned_std_bars(&x, &y, &r, 20).unwrap();
        assert!(bars.x_centers.is_empty());
        assert!(bars.y_centers.is_empty());
        assert!(bars.y_errors.is_empty());
    }

    #[test]
    fn test_bin_count_and_center_bounds() {
        let x: Vec<f64> = (0..23).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|&v| 2.0 * v).collect();
        let r: Vec<f64> = (0..23).map(|i| if i % 2 == 0 { 0.5 } else { -0.5 }).collect();

        let bars = binned_std_bars(&x, &y, &r, 20).unwrap();
        // k = min(20, 23/5) = 4, bins of 5 with the last absorbing 8.
        assert_eq!(bars.x_centers.len(), 4);
        assert!(bars.x_centers.len() <= 23 / 5);
        for center in &bars.x_centers {
            assert!(*center >= 0.0 && *center <= 22.0);
        }
        for pair in bars.x_centers.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn test_bin_statistics() {
        // Two bins of 5 over unshuffled x; residuals alternate ±1 about 0.
        let x: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|&v| v + 10.0).collect();
        let r: Vec<f64> = (0..10).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();

        let bars = binned_std_bars(&x, &y, &r, 2).unwrap();
        assert_eq!(bars.x_centers.len(), 2);
        assert_abs_diff_eq!(bars.x_centers[0], 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bars.y_centers[0], 12.0, epsilon = 1e-12);
        // Bin residuals [1,-1,1,-1,1]: mean 0.2, population std sqrt(0.96).
        assert_abs_diff_eq!(bars.y_errors[0], 0.96f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_unsorted_input_is_binned_by_x() {
        let x = vec![5.0, 1.0, 4.0, 0.0, 3.0, 9.0, 2.0, 8.0, 6.0, 7.0];
        let y = x.clone();
        let r = vec![0.0; 10];

        let bars = binned_std_bars(&x, &y, &r, 2).unwrap();
        // Sorted halves are 0..=4 and 5..=9.
        assert_abs_diff_eq!(bars.x_centers[0], 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bars.x_centers[1], 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_bin_count() {
        let result = binned_std_bars(&[1.0], &[1.0], &[0.0], 0);
        assert!(matches!(
            result,
            Err(AnalysisError::InvalidConfig {
                field: "sd_bin_count",
                ..
            })
        ));
    }

    #[test]
    fn test_per_point_se_shape_and_edges() {
        assert_eq!(per_point_se_bars(&[1.0, 2.0], &[0.1, 0.2]), vec![0.0, 0.0]);
        assert_eq!(
            per_point_se_bars(&[2.0, 2.0, 2.0], &[0.1, 0.2, 0.3]),
            vec![0.0, 0.0, 0.0]
        );

        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let r = [0.5, -0.5, 0.5, -0.5, 0.5];
        let se = per_point_se_bars(&x, &r);
        assert_eq!(se.len(), 5);
        assert!(se.iter().all(|&v| v > 0.0));
        // Farthest points from x̄ carry the largest standard error.
        assert!(se[0] > se[2]);
        assert_abs_diff_eq!(se[0], se[4], epsilon = 1e-12);
    }

    #[test]
    fn test_mode_dispatch() {
        let x: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let y = x.clone();
        let r = vec![0.0; 10];
        let config = FitConfig::default();

        assert!(matches!(
            error_bars(ErrorBarMode::None, &x, &y, &r, &config).unwrap(),
            ErrorBars::None
        ));
        assert!(matches!(
            error_bars(ErrorBarMode::StandardDeviation, &x, &y, &r, &config).unwrap(),
            ErrorBars::Binned(_)
        ));
        assert!(matches!(
            error_bars(ErrorBarMode::StandardError, &x, &y, &r, &config).unwrap(),
            ErrorBars::PerPoint(se) if se.len() == 10
        ));
    }
}
