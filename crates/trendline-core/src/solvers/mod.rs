//! Numerical kernel: linear least-squares and damped Gauss-Newton solvers.

mod levenberg;
mod lstsq;

pub use levenberg::{fit_two_parameter, MAX_ITERATIONS};
pub use lstsq::{solve_least_squares, vandermonde};
