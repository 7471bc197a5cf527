//! Reduction of the SDF and risky-return series to pricing moments.
//!
//! ```text
//! Rf             = 1 / mean(M)
//! Re_mean        = mean(exp(re))
//! equity_premium = Re_mean - Rf
//! euler_residual = mean(M * exp(re)) - 1
//! ```

use econ_core::math::stats::{mean, mean_product};
use econ_core::types::{SimulationError, Stage};
use serde::Serialize;
use tracing::debug;

use super::kernel::SdfSeries;
use super::paths::ClampReport;

/// Gross risky returns `Re[t] = exp(re[t])`.
#[derive(Clone, Debug, PartialEq)]
pub struct RiskyReturnSeries {
    values: Vec<f64>,
}

impl RiskyReturnSeries {
    /// Exponentiates risky log-return shocks.
    ///
    /// # Errors
    ///
    /// `SimulationError::NonFiniteValue` at `MomentEstimation` on overflow.
    pub fn from_log_returns(log_returns: &[f64]) -> Result<Self, SimulationError> {
        let mut values = Vec::with_capacity(log_returns.len());
        for (t, &r) in log_returns.iter().enumerate() {
            let gross = r.exp();
            if !gross.is_finite() {
                return Err(SimulationError::NonFiniteValue {
                    stage: Stage::MomentEstimation,
                    series: "risky_return",
                    index: t,
                });
            }
            values.push(gross);
        }
        Ok(Self { values })
    }

    /// Gross return values.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Pricing moments of one run.
///
/// Created once by [`estimate_moments`] and never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PricingResult {
    /// Habit intensity of the run.
    pub alpha: f64,
    /// Average gross risk-free rate, `1 / mean(M)`.
    pub rf_mean: f64,
    /// Average gross risky return.
    pub re_mean: f64,
    /// `re_mean - rf_mean`.
    pub equity_premium: f64,
    /// Number of periods where the surplus floor engaged.
    pub clamped_periods: usize,
    /// Sample pricing error `mean(M * Re) - 1`.
    pub euler_residual: f64,
}

/// Reduces the SDF and return series to a [`PricingResult`].
///
/// # Errors
///
/// - `InvalidParameters` at `MomentEstimation` if the series lengths differ
/// - `DegenerateMean` if a series is empty or its mean is zero or non-finite
///
/// # Examples
///
/// ```rust
/// use econ_pricing::economy::{build_paths, derive_kernel, estimate_moments, RiskyReturnSeries};
///
/// let (_, surplus) = build_paths(&[0.0, 0.0], 0.0).unwrap();
/// let (_, sdf) = derive_kernel(&surplus, 0.99, 2.0).unwrap();
/// let returns = RiskyReturnSeries::from_log_returns(&[0.0, 0.0]).unwrap();
///
/// let result = estimate_moments(0.0, &sdf, &returns, surplus.clamp_report()).unwrap();
/// assert!((result.rf_mean - 1.0 / 0.99).abs() < 1e-12);
/// assert_eq!(result.re_mean, 1.0);
/// ```
pub fn estimate_moments(
    alpha: f64,
    sdf: &SdfSeries,
    returns: &RiskyReturnSeries,
    clamps: &ClampReport,
) -> Result<PricingResult, SimulationError> {
    if sdf.len() != returns.len() {
        return Err(SimulationError::invalid_at(
            Stage::MomentEstimation,
            "series",
            format!(
                "SDF has {} periods but risky returns have {}",
                sdf.len(),
                returns.len()
            ),
        ));
    }

    let sdf_mean = mean(sdf.values()).unwrap_or(f64::NAN);
    if !sdf_mean.is_finite() || sdf_mean == 0.0 {
        return Err(SimulationError::DegenerateMean {
            stage: Stage::MomentEstimation,
            series: "sdf",
            value: sdf_mean,
        });
    }

    let re_mean = mean(returns.values()).unwrap_or(f64::NAN);
    if !re_mean.is_finite() {
        return Err(SimulationError::DegenerateMean {
            stage: Stage::MomentEstimation,
            series: "risky_return",
            value: re_mean,
        });
    }

    let pricing = mean_product(sdf.values(), returns.values()).unwrap_or(f64::NAN);
    let rf_mean = 1.0 / sdf_mean;

    debug!(sdf_mean, rf_mean, re_mean, "moments estimated");

    Ok(PricingResult {
        alpha,
        rf_mean,
        re_mean,
        equity_premium: re_mean - rf_mean,
        clamped_periods: clamps.count(),
        euler_residual: pricing - 1.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::economy::kernel::derive_kernel;
    use crate::economy::paths::build_paths;
    use approx::assert_relative_eq;

    fn kernel_for(growth: &[f64], alpha: f64) -> (SdfSeries, ClampReport) {
        let (_, surplus) = build_paths(growth, alpha).unwrap();
        let (_, sdf) = derive_kernel(&surplus, 0.99, 2.0).unwrap();
        (sdf, surplus.clamp_report().clone())
    }

    #[test]
    fn test_constant_economy() {
        let growth = [0.001; 20];
        let (sdf, clamps) = kernel_for(&growth, 0.0);
        let returns = RiskyReturnSeries::from_log_returns(&[0.005; 20]).unwrap();

        let result = estimate_moments(0.0, &sdf, &returns, &clamps).unwrap();

        assert_relative_eq!(result.rf_mean, (2.0_f64 * 0.001).exp() / 0.99, max_relative = 1e-12);
        assert_relative_eq!(result.re_mean, 0.005_f64.exp(), max_relative = 1e-12);
        assert_relative_eq!(
            result.equity_premium,
            result.re_mean - result.rf_mean,
            epsilon = 0.0
        );
        assert_eq!(result.clamped_periods, 0);
        let expected_residual = 0.99 * (-0.002_f64).exp() * 0.005_f64.exp() - 1.0;
        assert_relative_eq!(result.euler_residual, expected_residual, epsilon = 1e-12);
    }

    #[test]
    fn test_length_mismatch() {
        let (sdf, clamps) = kernel_for(&[0.0; 3], 0.0);
        let returns = RiskyReturnSeries::from_log_returns(&[0.0; 2]).unwrap();

        let err = estimate_moments(0.0, &sdf, &returns, &clamps).unwrap_err();
        assert_eq!(err.stage(), Stage::MomentEstimation);
    }

    #[test]
    fn test_empty_series_is_degenerate() {
        let (sdf, clamps) = kernel_for(&[], 0.0);
        let returns = RiskyReturnSeries::from_log_returns(&[]).unwrap();

        let err = estimate_moments(0.0, &sdf, &returns, &clamps).unwrap_err();
        assert!(matches!(
            err,
            SimulationError::DegenerateMean {
                series: "sdf",
                ..
            }
        ));
    }

    #[test]
    fn test_clamp_count_is_carried() {
        let growth = [0.5_f64.ln(), 0.0];
        let (sdf, clamps) = kernel_for(&growth, 0.9);
        let returns = RiskyReturnSeries::from_log_returns(&[0.0, 0.0]).unwrap();

        let result = estimate_moments(0.9, &sdf, &returns, &clamps).unwrap();
        assert_eq!(result.clamped_periods, clamps.count());
        assert!(result.clamped_periods >= 1);
        assert_eq!(result.alpha, 0.9);
    }

    #[test]
    fn test_return_overflow() {
        let err = RiskyReturnSeries::from_log_returns(&[0.0, 1000.0]).unwrap_err();
        assert!(matches!(
            err,
            SimulationError::NonFiniteValue {
                series: "risky_return",
                index: 1,
                ..
            }
        ));
    }
}
