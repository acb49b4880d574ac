//! Logarithmic fit `y = a + b·ln(x)` by damped Gauss-Newton.
//!
//! The sanitiser guarantees `x > 0` for this family, so `ln(x)` is always
//! defined here.

use crate::diagnostics::format::sig4;
use crate::errors::{AnalysisError, AnalysisResult};
use crate::solvers::{fit_two_parameter, MAX_ITERATIONS};
use crate::types::RegressionFamily;

pub(crate) const INITIAL_GUESS: [f64; 2] = [1.0, 1e-6];

/// Fit the logarithmic family; coefficients are `[a, b]`.
pub(crate) fn fit(x: &[f64], y: &[f64]) -> AnalysisResult<Vec<f64>> {
    let params = fit_two_parameter(x, y, INITIAL_GUESS, model, jacobian).ok_or(
        AnalysisError::FitDidNotConverge {
            family: RegressionFamily::Logarithmic,
            iterations: MAX_ITERATIONS,
            guess_a: INITIAL_GUESS[0],
            guess_b: INITIAL_GUESS[1],
        },
    )?;
    Ok(params.to_vec())
}

/// Evaluate `a + b·ln(x)`.
pub(crate) fn evaluate(coefficients: &[f64], x: f64) -> f64 {
    coefficients[0] + coefficients[1] * x.ln()
}

fn model(params: [f64; 2], x: f64) -> f64 {
    params[0] + params[1] * x.ln()
}

fn jacobian(_params: [f64; 2], x: f64) -> [f64; 2] {
    [1.0, x.ln()]
}

/// Render `"{a} + {b} * ln(x)"`.
pub(crate) fn equation(coefficients: &[f64]) -> String {
    format!(
        "{} + {} * ln(x)",
        sig4(coefficients[0]),
        sig4(coefficients[1])
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::E;

    #[test]
    fn test_exact_log_curve() {
        let x = [1.0, E, E * E];
        let y = [0.0, 1.0, 2.0]; // a = 0, b = 1

        let c = fit(&x, &y).unwrap();
        assert!(c[0].abs() < 1e-8);
        assert!((c[1] - 1.0).abs() < 1e-8);
    }

    #[test]
    fn test_offset_and_scale() {
        let x: [f64; 5] = [1.0, 2.0, 4.0, 8.0, 16.0];
        let y: Vec<f64> = x.iter().map(|&v| 3.0 - 2.0 * v.ln()).collect();

        let c = fit(&x, &y).unwrap();
        assert!((c[0] - 3.0).abs() < 1e-8);
        assert!((c[1] + 2.0).abs() < 1e-8);
    }

    #[test]
    fn test_equation_rendering() {
        assert_eq!(equation(&[0.5, 2.0]), "0.5 + 2 * ln(x)");
        assert_eq!(equation(&[-1.0, 0.25]), "-1 + 0.25 * ln(x)");
    }
}
