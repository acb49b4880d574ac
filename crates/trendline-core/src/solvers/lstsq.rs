//! QR-based linear least squares.

use faer::prelude::*;
use faer::{Col, Mat};

use crate::errors::{AnalysisError, AnalysisResult};

/// Solve `min ||M·c − y||²` and return the coefficient vector.
///
/// QR handles tall systems (more rows than columns); a solution containing
/// non-finite entries is rejected as singular.
pub fn solve_least_squares(design: &Mat<f64>, rhs: &Col<f64>) -> AnalysisResult<Vec<f64>> {
    let solution = design.qr().solve_lstsq(rhs);
    let coefficients: Vec<f64> = (0..design.ncols()).map(|j| solution.read(j)).collect();
    if coefficients.iter().any(|c| !c.is_finite()) {
        return Err(AnalysisError::SingularMatrix);
    }
    Ok(coefficients)
}

/// Build the `n x (degree + 1)` Vandermonde matrix with columns `1, x, x², ...`.
pub fn vandermonde(x: &[f64], degree: usize) -> Mat<f64> {
    Mat::from_fn(x.len(), degree + 1, |i, j| x[i].powi(j as i32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solves_exact_line() {
        // y = 2 + 3x on x = [0, 1, 2]
        let design = vandermonde(&[0.0, 1.0, 2.0], 1);
        let rhs = Col::from_fn(3, |i| [2.0, 5.0, 8.0][i]);

        let beta = solve_least_squares(&design, &rhs).unwrap();
        assert!((beta[0] - 2.0).abs() < 1e-10);
        assert!((beta[1] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_solves_overdetermined_system() {
        // Noisy line: the solve must still return finite coefficients.
        let x = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [0.1, 1.9, 4.2, 5.8, 8.1, 9.9];
        let design = vandermonde(&x, 1);
        let rhs = Col::from_fn(y.len(), |i| y[i]);

        let beta = solve_least_squares(&design, &rhs).unwrap();
        assert!((beta[1] - 2.0).abs() < 0.1);
    }

    #[test]
    fn test_vandermonde_shape() {
        let m = vandermonde(&[2.0, 3.0], 3);
        assert_eq!(m.nrows(), 2);
        assert_eq!(m.ncols(), 4);
        assert_eq!(m.read(0, 0), 1.0);
        assert_eq!(m.read(0, 3), 8.0);
        assert_eq!(m.read(1, 2), 9.0);
    }
}
