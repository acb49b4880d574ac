//! trendline-core: regression fitting and uncertainty diagnostics for
//! two-column tabular data.
//!
//! This crate is the analysis backend of a tabular data-exploration
//! application. A host hands it a [`Table`] plus a [`FitConfig`] and gets
//! back an immutable [`FitResult`] bundle: a dense fitted curve, per-point
//! predictions, residuals and goodness-of-fit metrics. Separate operations
//! derive pointwise confidence bands and error bars from a fit.
//!
//! Everything here is a pure function over immutable inputs: no shared
//! state, no background work, no I/O.

pub mod diagnostics;
pub mod errors;
pub mod models;
pub mod sanitize;
pub mod solvers;
pub mod table;
pub mod types;

pub use diagnostics::{binned_std_bars, confidence_band, error_bars, per_point_se_bars};
pub use errors::{AnalysisError, AnalysisResult};
pub use models::{fit, fit_sample, predict};
pub use sanitize::sanitize_xy;
pub use table::{Column, Table};
pub use types::*;
