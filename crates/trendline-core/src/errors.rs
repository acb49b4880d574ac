use thiserror::Error;

use crate::types::RegressionFamily;

/// Errors that can occur during regression analysis
#[derive(Error, Debug)]
pub enum AnalysisError {
    // Input validation errors
    #[error("Unknown column: '{column}'")]
    UnknownColumn { column: String },

    #[error("Column '{column}' is not numeric")]
    NonNumericInput { column: String },

    #[error("Insufficient data: {rows} usable rows (need at least {needed})")]
    InsufficientData { rows: usize, needed: usize },

    // Numerical errors
    #[error(
        "{family} fit did not converge after {iterations} iterations \
         (initial guess: a={guess_a}, b={guess_b})"
    )]
    FitDidNotConverge {
        family: RegressionFamily,
        iterations: usize,
        guess_a: f64,
        guess_b: f64,
    },

    #[error("Design matrix is singular or near-singular")]
    SingularMatrix,

    // Configuration errors
    #[error("Invalid {field}: {message}")]
    InvalidConfig {
        field: &'static str,
        message: String,
    },
}

/// Result type for analysis operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;
