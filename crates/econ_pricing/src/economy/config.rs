//! Simulation configuration.
//!
//! This module provides the immutable [`SimulationConfig`] record and its
//! builder. Defaults describe a quarterly-style economy with mild consumption
//! growth and a volatile risky asset.

use econ_core::math::covariance::Covariance2;
use econ_core::types::SimulationError;
use serde::{Deserialize, Serialize};

/// Default number of simulated periods.
pub const DEFAULT_HORIZON: usize = 10_000;
/// Default subjective discount factor.
pub const DEFAULT_BETA: f64 = 0.99;
/// Default curvature (risk aversion).
pub const DEFAULT_GAMMA: f64 = 2.0;
/// Default habit intensity.
pub const DEFAULT_ALPHA: f64 = 0.0;
/// Default mean consumption-growth shock.
pub const DEFAULT_MU_C: f64 = 0.001;
/// Default consumption-growth volatility.
pub const DEFAULT_SIGMA_C: f64 = 0.02;
/// Default mean risky log-return shock.
pub const DEFAULT_MU_E: f64 = 0.005;
/// Default risky log-return volatility.
pub const DEFAULT_SIGMA_E: f64 = 0.10;
/// Default shock correlation.
pub const DEFAULT_RHO_CE: f64 = 0.6;
/// Default seed.
pub const DEFAULT_SEED: u64 = 0;

/// Maximum number of simulated periods allowed.
pub const MAX_HORIZON: usize = 100_000_000;

/// Parameters of one simulation run.
///
/// Immutable once built; use [`SimulationConfig::builder`] or deserialise
/// from a table where every missing field takes its default. Deserialised
/// values are not checked until [`validate`](Self::validate) is called; the
/// simulation entry points always validate before doing any work.
///
/// # Examples
///
/// ```rust
/// use econ_pricing::economy::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .horizon(500)
///     .alpha(0.8)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.horizon(), 500);
/// assert_eq!(config.alpha(), 0.8);
/// assert_eq!(config.beta(), 0.99);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of periods `T`.
    horizon: usize,
    /// Subjective discount factor, in (0, 1).
    beta: f64,
    /// Curvature of utility, strictly positive.
    gamma: f64,
    /// Habit intensity, in [0, 1).
    alpha: f64,
    /// Mean of the consumption-growth shock.
    mu_c: f64,
    /// Volatility of the consumption-growth shock.
    sigma_c: f64,
    /// Mean of the risky log-return shock.
    mu_e: f64,
    /// Volatility of the risky log-return shock.
    sigma_e: f64,
    /// Correlation between the two shocks.
    rho_ce: f64,
    /// Seed of the run's generator handle.
    seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            horizon: DEFAULT_HORIZON,
            beta: DEFAULT_BETA,
            gamma: DEFAULT_GAMMA,
            alpha: DEFAULT_ALPHA,
            mu_c: DEFAULT_MU_C,
            sigma_c: DEFAULT_SIGMA_C,
            mu_e: DEFAULT_MU_E,
            sigma_e: DEFAULT_SIGMA_E,
            rho_ce: DEFAULT_RHO_CE,
            seed: DEFAULT_SEED,
        }
    }
}

impl SimulationConfig {
    /// Creates a new configuration builder seeded with the defaults.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Number of periods `T`.
    #[inline]
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Subjective discount factor.
    #[inline]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Curvature of utility.
    #[inline]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Habit intensity.
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Mean of the consumption-growth shock.
    #[inline]
    pub fn mu_c(&self) -> f64 {
        self.mu_c
    }

    /// Volatility of the consumption-growth shock.
    #[inline]
    pub fn sigma_c(&self) -> f64 {
        self.sigma_c
    }

    /// Mean of the risky log-return shock.
    #[inline]
    pub fn mu_e(&self) -> f64 {
        self.mu_e
    }

    /// Volatility of the risky log-return shock.
    #[inline]
    pub fn sigma_e(&self) -> f64 {
        self.sigma_e
    }

    /// Correlation between the two shocks.
    #[inline]
    pub fn rho_ce(&self) -> f64 {
        self.rho_ce
    }

    /// Seed of the run's generator handle.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Mean vector `[mu_c, mu_e]` of the shock distribution.
    #[inline]
    pub fn shock_mean(&self) -> [f64; 2] {
        [self.mu_c, self.mu_e]
    }

    /// Covariance matrix of the shock distribution.
    ///
    /// # Errors
    ///
    /// `SimulationError::InvalidParameters` when the volatilities or the
    /// correlation do not describe a positive semi-definite matrix.
    pub fn covariance(&self) -> Result<Covariance2, SimulationError> {
        Covariance2::from_volatilities(self.sigma_c, self.sigma_e, self.rho_ce)
    }

    /// Returns a copy with a different habit intensity (not validated).
    #[inline]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Returns a copy with a different seed.
    #[inline]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Returns a copy with a different horizon (not validated).
    #[inline]
    pub fn with_horizon(mut self, horizon: usize) -> Self {
        self.horizon = horizon;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::InvalidParameters` (stage `Validation`) for
    /// the first violated constraint:
    /// - `horizon` is 0 or greater than [`MAX_HORIZON`]
    /// - `beta` outside (0, 1)
    /// - `gamma` not strictly positive
    /// - `alpha` outside [0, 1)
    /// - non-finite means
    /// - negative or non-finite volatilities
    /// - `rho_ce` outside [-1, 1]
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.horizon == 0 || self.horizon > MAX_HORIZON {
            return Err(SimulationError::invalid(
                "horizon",
                format!("must lie in [1, {}], got {}", MAX_HORIZON, self.horizon),
            ));
        }
        if !(self.beta > 0.0 && self.beta < 1.0) {
            return Err(SimulationError::invalid(
                "beta",
                format!("must lie in (0, 1), got {}", self.beta),
            ));
        }
        if !(self.gamma.is_finite() && self.gamma > 0.0) {
            return Err(SimulationError::invalid(
                "gamma",
                format!("must be finite and positive, got {}", self.gamma),
            ));
        }
        if !(self.alpha >= 0.0 && self.alpha < 1.0) {
            return Err(SimulationError::invalid(
                "alpha",
                format!("must lie in [0, 1), got {}", self.alpha),
            ));
        }
        for (name, value) in [("mu_c", self.mu_c), ("mu_e", self.mu_e)] {
            if !value.is_finite() {
                return Err(SimulationError::invalid(
                    name,
                    format!("must be finite, got {}", value),
                ));
            }
        }
        for (name, value) in [("sigma_c", self.sigma_c), ("sigma_e", self.sigma_e)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(SimulationError::invalid(
                    name,
                    format!("must be finite and non-negative, got {}", value),
                ));
            }
        }
        if !(-1.0..=1.0).contains(&self.rho_ce) {
            return Err(SimulationError::invalid(
                "rho_ce",
                format!("must lie in [-1, 1], got {}", self.rho_ce),
            ));
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
///
/// Unset fields keep their defaults; [`build`](Self::build) validates.
///
/// # Examples
///
/// ```rust
/// use econ_pricing::economy::SimulationConfig;
///
/// let err = SimulationConfig::builder().beta(1.0).build().unwrap_err();
/// assert!(err.to_string().contains("beta"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    config: SimulationConfig,
}

impl SimulationConfigBuilder {
    /// Sets the number of periods.
    #[inline]
    pub fn horizon(mut self, horizon: usize) -> Self {
        self.config.horizon = horizon;
        self
    }

    /// Sets the subjective discount factor.
    #[inline]
    pub fn beta(mut self, beta: f64) -> Self {
        self.config.beta = beta;
        self
    }

    /// Sets the curvature of utility.
    #[inline]
    pub fn gamma(mut self, gamma: f64) -> Self {
        self.config.gamma = gamma;
        self
    }

    /// Sets the habit intensity.
    #[inline]
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.config.alpha = alpha;
        self
    }

    /// Sets the consumption-growth shock mean and volatility.
    #[inline]
    pub fn consumption_shock(mut self, mu_c: f64, sigma_c: f64) -> Self {
        self.config.mu_c = mu_c;
        self.config.sigma_c = sigma_c;
        self
    }

    /// Sets the risky log-return shock mean and volatility.
    #[inline]
    pub fn risky_shock(mut self, mu_e: f64, sigma_e: f64) -> Self {
        self.config.mu_e = mu_e;
        self.config.sigma_e = sigma_e;
        self
    }

    /// Sets the shock correlation.
    #[inline]
    pub fn rho_ce(mut self, rho_ce: f64) -> Self {
        self.config.rho_ce = rho_ce;
        self
    }

    /// Sets the seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by [`SimulationConfig::validate`].
    pub fn build(self) -> Result<SimulationConfig, SimulationError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use econ_core::types::Stage;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();

        assert_eq!(config.horizon(), 10_000);
        assert_eq!(config.beta(), 0.99);
        assert_eq!(config.gamma(), 2.0);
        assert_eq!(config.alpha(), 0.0);
        assert_eq!(config.shock_mean(), [0.001, 0.005]);
        assert_eq!(config.sigma_c(), 0.02);
        assert_eq!(config.sigma_e(), 0.10);
        assert_eq!(config.rho_ce(), 0.6);
        assert_eq!(config.seed(), 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_valid() {
        let config = SimulationConfig::builder()
            .horizon(1)
            .alpha(0.8)
            .consumption_shock(0.0, 0.0)
            .risky_shock(0.0, 0.0)
            .seed(42)
            .build()
            .unwrap();

        assert_eq!(config.horizon(), 1);
        assert_eq!(config.alpha(), 0.8);
        assert_eq!(config.seed(), 42);
    }

    #[test]
    fn test_invalid_horizon() {
        let result = SimulationConfig::builder().horizon(0).build();
        assert!(matches!(
            result,
            Err(SimulationError::InvalidParameters { name: "horizon", .. })
        ));

        let result = SimulationConfig::builder().horizon(MAX_HORIZON + 1).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_beta_gamma_alpha() {
        for beta in [0.0, 1.0, -0.5, f64::NAN] {
            assert!(SimulationConfig::builder().beta(beta).build().is_err());
        }
        for gamma in [0.0, -2.0, f64::INFINITY] {
            assert!(SimulationConfig::builder().gamma(gamma).build().is_err());
        }
        for alpha in [1.0, -0.1, 1.5, f64::NAN] {
            assert!(SimulationConfig::builder().alpha(alpha).build().is_err());
        }
    }

    #[test]
    fn test_invalid_covariance_inputs() {
        let err = SimulationConfig::builder()
            .consumption_shock(0.001, -0.02)
            .build()
            .unwrap_err();
        assert_eq!(err.stage(), Stage::Validation);

        assert!(SimulationConfig::builder().rho_ce(1.5).build().is_err());
        assert!(SimulationConfig::builder()
            .risky_shock(f64::NAN, 0.1)
            .build()
            .is_err());
    }

    #[test]
    fn test_covariance_from_config() {
        let cov = SimulationConfig::default().covariance().unwrap();
        assert!((cov.covariance() - 0.6 * 0.02 * 0.10).abs() < 1e-15);
    }

    #[test]
    fn test_with_alpha_is_unvalidated_copy() {
        let base = SimulationConfig::default();
        let shifted = base.with_alpha(2.0);

        assert_eq!(base.alpha(), 0.0);
        assert!(shifted.validate().is_err());
    }
}
