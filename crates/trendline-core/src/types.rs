use std::fmt;

use crate::errors::{AnalysisError, AnalysisResult};

/// Regression family selected by the host application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegressionFamily {
    /// Straight line `y = m·x + b`
    #[default]
    Linear,
    /// Polynomial of configurable degree on the monomial basis
    Polynomial,
    /// Exponential growth/decay `y = a·exp(b·x)`
    Exponential,
    /// Natural-log curve `y = a + b·ln(x)`; requires `x > 0`
    Logarithmic,
}

impl fmt::Display for RegressionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RegressionFamily::Linear => "Linear",
            RegressionFamily::Polynomial => "Polynomial",
            RegressionFamily::Exponential => "Exponential",
            RegressionFamily::Logarithmic => "Logarithmic",
        };
        f.write_str(name)
    }
}

/// Error-bar rendering mode selected by the host application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorBarMode {
    /// No error bars
    #[default]
    None,
    /// Binned standard-deviation bars along sorted x
    StandardDeviation,
    /// Per-point standard error of the fitted mean
    StandardError,
}

/// Options for regression fitting and the derived uncertainty artefacts
#[derive(Debug, Clone)]
pub struct FitConfig {
    /// Regression family to fit
    pub family: RegressionFamily,
    /// Polynomial degree (used only when family is Polynomial)
    pub degree: usize,
    /// Confidence level for the pointwise band (e.g. 0.95)
    pub confidence_level: f64,
    /// Maximum number of equal-count bins for binned SD bars
    pub sd_bin_count: usize,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            family: RegressionFamily::Linear,
            degree: 2,
            confidence_level: 0.95,
            sd_bin_count: 20,
        }
    }
}

impl FitConfig {
    /// Reject configurations no operation can honour.
    pub fn validate(&self) -> AnalysisResult<()> {
        if self.degree < 1 {
            return Err(AnalysisError::InvalidConfig {
                field: "degree",
                message: format!("{} (must be >= 1)", self.degree),
            });
        }
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return Err(AnalysisError::InvalidConfig {
                field: "confidence_level",
                message: format!("{} (must be in (0, 1))", self.confidence_level),
            });
        }
        if self.sd_bin_count < 1 {
            return Err(AnalysisError::InvalidConfig {
                field: "sd_bin_count",
                message: format!("{} (must be >= 1)", self.sd_bin_count),
            });
        }
        Ok(())
    }
}

/// Goodness-of-fit summary for a single regression
#[derive(Debug, Clone)]
pub struct RegressionMetrics {
    /// R-squared (coefficient of determination); 0 when the sample has no variance
    pub r_squared: f64,
    /// Root-mean-square error of the residuals
    pub rmse: f64,
    /// Human-readable equation of the fitted curve
    pub equation: String,
}

/// Immutable bundle returned by a fit
#[derive(Debug, Clone)]
pub struct FitResult {
    /// Family that produced this fit
    pub family: RegressionFamily,
    /// Fitted coefficients; polynomial coefficients are highest-power-first
    pub coefficients: Vec<f64>,
    /// Dense 100-point grid spanning `[min(x), max(x)]`
    pub x_line: Vec<f64>,
    /// Predictions on `x_line`
    pub y_line: Vec<f64>,
    /// Predictions at each original x, in input order
    pub y_pred: Vec<f64>,
    /// Observed minus fitted value at each original point
    pub residuals: Vec<f64>,
    /// Goodness-of-fit summary
    pub metrics: RegressionMetrics,
}

/// Pointwise half-widths of a ± band, aligned to a fit's `x_line`
#[derive(Debug, Clone)]
pub struct ConfidenceBand {
    /// Half-width of the band at each grid point; never negative
    pub half_width: Vec<f64>,
}

/// Equal-count binned standard-deviation bars, ordered by ascending center
#[derive(Debug, Clone, Default)]
pub struct BinnedStdBars {
    /// Mean x of each kept bin
    pub x_centers: Vec<f64>,
    /// Mean y of each kept bin
    pub y_centers: Vec<f64>,
    /// Standard deviation of the residuals in each kept bin
    pub y_errors: Vec<f64>,
}

/// Error bars produced by the mode dispatch
#[derive(Debug, Clone)]
pub enum ErrorBars {
    /// No bars requested
    None,
    /// Binned standard-deviation bars
    Binned(BinnedStdBars),
    /// Per-point standard errors, aligned to the input x
    PerPoint(Vec<f64>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FitConfig::default();
        assert_eq!(config.family, RegressionFamily::Linear);
        assert_eq!(config.degree, 2);
        assert_eq!(config.confidence_level, 0.95);
        assert_eq!(config.sd_bin_count, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_degree() {
        let config = FitConfig {
            degree: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AnalysisError::InvalidConfig { field: "degree", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_confidence_level_bounds() {
        for level in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            let config = FitConfig {
                confidence_level: level,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(AnalysisError::InvalidConfig {
                    field: "confidence_level",
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_validate_rejects_zero_bin_count() {
        let config = FitConfig {
            sd_bin_count: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AnalysisError::InvalidConfig {
                field: "sd_bin_count",
                ..
            })
        ));
    }

    #[test]
    fn test_family_display_names() {
        assert_eq!(RegressionFamily::Linear.to_string(), "Linear");
        assert_eq!(RegressionFamily::Logarithmic.to_string(), "Logarithmic");
    }
}
