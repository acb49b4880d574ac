//! Regression fit engines and the shared packaging tail.
//!
//! Each family module produces coefficients and an equation string; the
//! shared tail here builds the dense prediction grid, evaluates the fit at
//! the sample points, and packages metrics and residuals.

mod exponential;
mod linear;
mod logarithmic;
mod polynomial;

use crate::diagnostics::{r_squared, residuals, rmse};
use crate::errors::{AnalysisError, AnalysisResult};
use crate::sanitize::sanitize_xy;
use crate::table::Table;
use crate::types::{FitConfig, FitResult, RegressionFamily, RegressionMetrics};

/// Number of points on the dense prediction grid.
pub const GRID_POINTS: usize = 100;

/// Sanitise two named columns and fit the configured family.
pub fn fit(
    table: &Table,
    x_col: &str,
    y_col: &str,
    config: &FitConfig,
) -> AnalysisResult<FitResult> {
    let (x, y) = sanitize_xy(table, x_col, y_col, config.family)?;
    fit_sample(&x, &y, config)
}

/// Fit the configured family to an already-sanitised sample.
pub fn fit_sample(x: &[f64], y: &[f64], config: &FitConfig) -> AnalysisResult<FitResult> {
    config.validate()?;
    debug_assert_eq!(x.len(), y.len());
    if x.is_empty() {
        return Err(AnalysisError::InsufficientData { rows: 0, needed: 1 });
    }

    let (coefficients, equation) = match config.family {
        RegressionFamily::Linear => {
            let c = linear::fit(x, y);
            let eq = linear::equation(&c);
            (c, eq)
        }
        RegressionFamily::Polynomial => {
            let c = polynomial::fit(x, y, config.degree)?;
            let eq = polynomial::equation(&c);
            (c, eq)
        }
        RegressionFamily::Exponential => {
            let c = exponential::fit(x, y)?;
            let eq = exponential::equation(&c);
            (c, eq)
        }
        RegressionFamily::Logarithmic => {
            let c = logarithmic::fit(x, y)?;
            let eq = logarithmic::equation(&c);
            (c, eq)
        }
    };

    let (min_x, max_x) = bounds(x);
    let x_line = linspace(min_x, max_x, GRID_POINTS);
    let y_line: Vec<f64> = x_line
        .iter()
        .map(|&u| predict(config.family, &coefficients, u))
        .collect();
    let y_pred: Vec<f64> = x
        .iter()
        .map(|&u| predict(config.family, &coefficients, u))
        .collect();
    let res = residuals(y, &y_pred);

    let summary = RegressionMetrics {
        r_squared: r_squared(y, &y_pred),
        rmse: rmse(&res),
        equation,
    };

    Ok(FitResult {
        family: config.family,
        coefficients,
        x_line,
        y_line,
        y_pred,
        residuals: res,
        metrics: summary,
    })
}

/// Evaluate a fitted family's coefficients at an arbitrary x.
pub fn predict(family: RegressionFamily, coefficients: &[f64], x: f64) -> f64 {
    match family {
        RegressionFamily::Linear => coefficients[0] * x + coefficients[1],
        RegressionFamily::Polynomial => polynomial::evaluate(coefficients, x),
        RegressionFamily::Exponential => exponential::evaluate(coefficients, x),
        RegressionFamily::Logarithmic => logarithmic::evaluate(coefficients, x),
    }
}

fn bounds(x: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in x {
        min = min.min(v);
        max = max.max(v);
    }
    (min, max)
}

/// `count` linearly spaced points from `start` to `end` inclusive.
///
/// The final point is pinned to `end` so the grid spans the sample bounds
/// exactly; when `start == end` every point coincides.
fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    if count == 1 {
        return vec![start];
    }
    let step = (end - start) / (count - 1) as f64;
    (0..count)
        .map(|i| {
            if i + 1 == count {
                end
            } else {
                start + step * i as f64
            }
        })
        .collect()
}
