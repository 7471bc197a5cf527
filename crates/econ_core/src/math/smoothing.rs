//! Recursive one-dimensional price smoothing.
//!
//! This module provides a scalar Kalman filter with a random-walk state,
//! used to denoise an ordered sequence of observed prices. The filter keeps
//! no state between calls: every call to [`PriceSmoother::smooth`] starts
//! from the first observation.

use crate::types::{SimulationError, Stage};

/// Default process variance `Q`.
pub const DEFAULT_PROCESS_VARIANCE: f64 = 1e-5;

/// Default measurement variance `R`.
pub const DEFAULT_MEASUREMENT_VARIANCE: f64 = 0.1;

/// Default initial estimate covariance `P0`.
pub const DEFAULT_INITIAL_COVARIANCE: f64 = 1.0;

/// Scalar Kalman filter over a price sequence.
///
/// # Mathematical Definition
/// ```text
/// x_0 = z_0,  P_0 given
/// for each observation z:
///     P = P + Q               (prediction)
///     K = P / (P + R)         (gain)
///     x = x + K * (z - x)     (correction)
///     P = (1 - K) * P
/// ```
///
/// # Examples
/// ```
/// use econ_core::math::smoothing::PriceSmoother;
///
/// let smoother = PriceSmoother::default();
/// let estimates = smoother.smooth(&[100.0, 101.0, 130.0, 103.0, 104.0]);
///
/// assert_eq!(estimates.len(), 5);
/// assert_eq!(estimates[0], 100.0);
/// // The 130 outlier is heavily damped.
/// assert!(estimates[2] < 115.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceSmoother {
    process_variance: f64,
    measurement_variance: f64,
    initial_covariance: f64,
}

impl Default for PriceSmoother {
    fn default() -> Self {
        Self {
            process_variance: DEFAULT_PROCESS_VARIANCE,
            measurement_variance: DEFAULT_MEASUREMENT_VARIANCE,
            initial_covariance: DEFAULT_INITIAL_COVARIANCE,
        }
    }
}

impl PriceSmoother {
    /// Creates a smoother with explicit variances.
    ///
    /// # Arguments
    /// * `process_variance` - `Q`, finite and non-negative
    /// * `measurement_variance` - `R`, finite and strictly positive
    /// * `initial_covariance` - `P0`, finite and non-negative
    ///
    /// # Errors
    /// `SimulationError::InvalidParameters` at [`Stage::Smoothing`] if any
    /// bound above is violated.
    pub fn new(
        process_variance: f64,
        measurement_variance: f64,
        initial_covariance: f64,
    ) -> Result<Self, SimulationError> {
        if !process_variance.is_finite() || process_variance < 0.0 {
            return Err(SimulationError::invalid_at(
                Stage::Smoothing,
                "process_variance",
                format!("must be finite and non-negative, got {}", process_variance),
            ));
        }
        if !measurement_variance.is_finite() || measurement_variance <= 0.0 {
            return Err(SimulationError::invalid_at(
                Stage::Smoothing,
                "measurement_variance",
                format!("must be finite and positive, got {}", measurement_variance),
            ));
        }
        if !initial_covariance.is_finite() || initial_covariance < 0.0 {
            return Err(SimulationError::invalid_at(
                Stage::Smoothing,
                "initial_covariance",
                format!("must be finite and non-negative, got {}", initial_covariance),
            ));
        }

        Ok(Self {
            process_variance,
            measurement_variance,
            initial_covariance,
        })
    }

    /// Process variance `Q`.
    pub fn process_variance(&self) -> f64 {
        self.process_variance
    }

    /// Measurement variance `R`.
    pub fn measurement_variance(&self) -> f64 {
        self.measurement_variance
    }

    /// Smooths the observations, returning one estimate per observation.
    ///
    /// An empty input yields an empty output.
    pub fn smooth(&self, prices: &[f64]) -> Vec<f64> {
        let Some(&first) = prices.first() else {
            return Vec::new();
        };

        let mut estimate = first;
        let mut covariance = self.initial_covariance;
        let mut estimates = Vec::with_capacity(prices.len());

        for &z in prices {
            covariance += self.process_variance;
            let gain = covariance / (covariance + self.measurement_variance);
            estimate += gain * (z - estimate);
            covariance *= 1.0 - gain;
            estimates.push(estimate);
        }

        estimates
    }
}
