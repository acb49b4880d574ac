//! Exponential fit `y = a·exp(b·x)` by damped Gauss-Newton.

use crate::diagnostics::format::sig4;
use crate::errors::{AnalysisError, AnalysisResult};
use crate::solvers::{fit_two_parameter, MAX_ITERATIONS};
use crate::types::RegressionFamily;

/// Initial guess for `(a, b)`; the near-zero rate keeps the first step
/// well-behaved on shallow growth.
pub(crate) const INITIAL_GUESS: [f64; 2] = [1.0, 1e-6];

/// Fit the exponential family; coefficients are `[a, b]`.
pub(crate) fn fit(x: &[f64], y: &[f64]) -> AnalysisResult<Vec<f64>> {
    let params = fit_two_parameter(x, y, INITIAL_GUESS, model, jacobian).ok_or(
        AnalysisError::FitDidNotConverge {
            family: RegressionFamily::Exponential,
            iterations: MAX_ITERATIONS,
            guess_a: INITIAL_GUESS[0],
            guess_b: INITIAL_GUESS[1],
        },
    )?;
    Ok(params.to_vec())
}

/// Evaluate `a·exp(b·x)`.
pub(crate) fn evaluate(coefficients: &[f64], x: f64) -> f64 {
    coefficients[0] * (coefficients[1] * x).exp()
}

fn model(params: [f64; 2], x: f64) -> f64 {
    params[0] * (params[1] * x).exp()
}

fn jacobian(params: [f64; 2], x: f64) -> [f64; 2] {
    let e = (params[1] * x).exp();
    [e, params[0] * x * e]
}

/// Render `"{a} * exp({b} * x)"`.
pub(crate) fn equation(coefficients: &[f64]) -> String {
    format!(
        "{} * exp({} * x)",
        sig4(coefficients[0]),
        sig4(coefficients[1])
    )
}
