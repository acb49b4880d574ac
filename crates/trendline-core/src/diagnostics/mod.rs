//! Goodness-of-fit metrics and uncertainty derivations.

mod confidence;
mod error_bars;
pub(crate) mod format;
mod metrics;

pub use confidence::{confidence_band, t_critical};
pub use error_bars::{binned_std_bars, error_bars, per_point_se_bars};
pub use metrics::{r_squared, residual_standard_error, residuals, rmse};
