//! Sample sanitisation: column type checks, finite-row masking, and
//! per-family domain constraints.

use crate::errors::{AnalysisError, AnalysisResult};
use crate::table::Table;
use crate::types::RegressionFamily;

/// Extract finite aligned `(x, y)` vectors for the requested family.
///
/// Rows where either value is missing (NaN) or infinite are dropped. The
/// logarithmic family additionally drops rows with `x <= 0`. Original row
/// order is preserved; an empty result is permitted and surfaces as
/// `InsufficientData` only on operations that need samples.
pub fn sanitize_xy(
    table: &Table,
    x_col: &str,
    y_col: &str,
    family: RegressionFamily,
) -> AnalysisResult<(Vec<f64>, Vec<f64>)> {
    let x = numeric_column(table, x_col)?;
    let y = numeric_column(table, y_col)?;

    let mut xs = Vec::with_capacity(x.len());
    let mut ys = Vec::with_capacity(x.len());
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        if !xi.is_finite() || !yi.is_finite() {
            continue;
        }
        if family == RegressionFamily::Logarithmic && xi <= 0.0 {
            continue;
        }
        xs.push(xi);
        ys.push(yi);
    }
    Ok((xs, ys))
}

fn numeric_column<'a>(table: &'a Table, name: &str) -> AnalysisResult<&'a [f64]> {
    let column = table
        .column(name)
        .ok_or_else(|| AnalysisError::UnknownColumn {
            column: name.to_string(),
        })?;
    column
        .as_numeric()
        .ok_or_else(|| AnalysisError::NonNumericInput {
            column: name.to_string(),
        })
}
