//! Polynomial least-squares fit on the monomial basis.

use faer::Col;

use crate::diagnostics::format::{fold_signs, sig4};
use crate::errors::{AnalysisError, AnalysisResult};
use crate::solvers::{solve_least_squares, vandermonde};

/// Fit a polynomial of the given degree; coefficients highest-power-first.
///
/// Requires at least `degree + 1` points for a determined system.
pub(crate) fn fit(x: &[f64], y: &[f64], degree: usize) -> AnalysisResult<Vec<f64>> {
    let degree = degree.max(1);
    if x.len() < degree + 1 {
        return Err(AnalysisError::InsufficientData {
            rows: x.len(),
            needed: degree + 1,
        });
    }

    let design = vandermonde(x, degree);
    let rhs = Col::from_fn(y.len(), |i| y[i]);
    let mut coefficients = solve_least_squares(&design, &rhs)?;
    coefficients.reverse();
    Ok(coefficients)
}

/// Evaluate highest-power-first coefficients at `x` by Horner's rule.
pub(crate) fn evaluate(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
}

/// Render `"c₀x^d + c₁x^(d-1) + … + c_d"`, then fold `"+ -"` into `"- "`.
/// A negative leading coefficient keeps its sign.
pub(crate) fn equation(coefficients: &[f64]) -> String {
    let degree = coefficients.len() - 1;
    let terms: Vec<String> = coefficients
        .iter()
        .enumerate()
        .map(|(i, &c)| match degree - i {
            0 => sig4(c),
            1 => format!("{}x", sig4(c)),
            power => format!("{}x^{}", sig4(c), power),
        })
        .collect();
    fold_signs(&terms.join(" + "))
}
