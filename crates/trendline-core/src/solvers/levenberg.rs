//! Damped Gauss-Newton (Levenberg-Marquardt) for two-parameter curve models.
//!
//! Both nonlinear families fitted here have exactly two parameters, so the
//! damped normal equations form a 2x2 system that is solved in closed form.
//! The solver is seedless and deterministic: identical inputs give identical
//! parameters.

/// Iteration cap for the nonlinear fitters.
pub const MAX_ITERATIONS: usize = 10_000;

const COST_TOLERANCE: f64 = 1e-12;
const STEP_TOLERANCE: f64 = 1e-12;

/// Fit a two-parameter model by Levenberg-Marquardt.
///
/// `model` evaluates the curve at `(params, x)`; `jacobian` returns the
/// partial derivatives of the model with respect to the two parameters.
///
/// Returns `None` when the iteration cap is exhausted before convergence.
pub fn fit_two_parameter<F, J>(
    x: &[f64],
    y: &[f64],
    initial_guess: [f64; 2],
    model: F,
    jacobian: J,
) -> Option<[f64; 2]>
where
    F: Fn([f64; 2], f64) -> f64,
    J: Fn([f64; 2], f64) -> [f64; 2],
{
    let mut params = initial_guess;
    let mut lambda = 1e-3;
    let mut cost = sum_squared_error(x, y, &model, params);

    for _ in 0..MAX_ITERATIONS {
        // Accumulate the normal equations JᵀJ·δ = Jᵀr, skipping rows whose
        // model value or gradient overflowed.
        let mut jtj = [0.0f64; 3]; // [0]=∂a∂a, [1]=∂a∂b, [2]=∂b∂b
        let mut jtr = [0.0f64; 2];
        for (&xi, &yi) in x.iter().zip(y.iter()) {
            let r = yi - model(params, xi);
            let g = jacobian(params, xi);
            if !r.is_finite() || !g[0].is_finite() || !g[1].is_finite() {
                continue;
            }
            jtj[0] += g[0] * g[0];
            jtj[1] += g[0] * g[1];
            jtj[2] += g[1] * g[1];
            jtr[0] += g[0] * r;
            jtr[1] += g[1] * r;
        }

        // Damp the diagonal by (1 + λ) and solve the 2x2 system.
        let a00 = jtj[0] * (1.0 + lambda);
        let a11 = jtj[2] * (1.0 + lambda);
        let a01 = jtj[1];
        let det = a00 * a11 - a01 * a01;
        if !det.is_finite() || det.abs() < f64::MIN_POSITIVE {
            lambda = (lambda * 10.0).min(1e12);
            continue;
        }

        let step = [
            (a11 * jtr[0] - a01 * jtr[1]) / det,
            (a00 * jtr[1] - a01 * jtr[0]) / det,
        ];
        let trial = [params[0] + step[0], params[1] + step[1]];
        let trial_cost = sum_squared_error(x, y, &model, trial);

        if trial_cost.is_finite() && trial_cost <= cost {
            let improvement = cost - trial_cost;
            params = trial;
            lambda = (lambda * 0.5).max(1e-12);

            let step_norm = (step[0] * step[0] + step[1] * step[1]).sqrt();
            let scale = 1.0 + (params[0] * params[0] + params[1] * params[1]).sqrt();
            if improvement <= COST_TOLERANCE * cost.max(f64::MIN_POSITIVE)
                || step_norm <= STEP_TOLERANCE * scale
            {
                return Some(params);
            }
            cost = trial_cost;
        } else {
            lambda = (lambda * 10.0).min(1e12);
        }
    }

    None
}

fn sum_squared_error<F>(x: &[f64], y: &[f64], model: &F, params: [f64; 2]) -> f64
where
    F: Fn([f64; 2], f64) -> f64,
{
    x.iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| {
            let r = yi - model(params, xi);
            r * r
        })
        .sum()
}
