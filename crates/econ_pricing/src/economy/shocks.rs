//! Correlated shock generation.
//!
//! Each period contributes one [`ShockPair`]: a consumption-growth shock and a
//! risky-asset log-return shock drawn jointly from a bivariate normal. Pairs
//! are independent across periods.
//!
//! The square-root factor used to correlate the draws is selected by the
//! [`ShockSampler`] implementation:
//! - [`CholeskySampler`]: lower triangular factor (default)
//! - [`SpectralSampler`]: eigendecomposition factor
//!
//! Both consume exactly two standard normals per period, first `z1` then
//! `z2`, so the stream position after `n` periods does not depend on the
//! backend.

use std::fmt;
use std::str::FromStr;

use econ_core::math::covariance::Covariance2;
use econ_core::types::{SimulationError, Stage};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::rng::EconRng;

/// One period's joint shock.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ShockPair {
    /// Consumption-growth shock `gc`.
    pub consumption: f64,
    /// Risky-asset log-return shock `re`.
    pub risky: f64,
}

/// Ordered sequence of `T` shock pairs, stored column-wise.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShockSeries {
    consumption: Vec<f64>,
    risky: Vec<f64>,
}

impl ShockSeries {
    /// Creates an empty series with room for `n` periods.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            consumption: Vec::with_capacity(n),
            risky: Vec::with_capacity(n),
        }
    }

    /// Builds a series from two equally long columns.
    ///
    /// # Errors
    ///
    /// `SimulationError::InvalidParameters` if the column lengths differ.
    pub fn from_columns(consumption: Vec<f64>, risky: Vec<f64>) -> Result<Self, SimulationError> {
        if consumption.len() != risky.len() {
            return Err(SimulationError::invalid_at(
                Stage::ShockGeneration,
                "shocks",
                format!(
                    "column lengths differ: {} consumption vs {} risky",
                    consumption.len(),
                    risky.len()
                ),
            ));
        }
        Ok(Self { consumption, risky })
    }

    /// Appends one period.
    #[inline]
    pub fn push(&mut self, pair: ShockPair) {
        self.consumption.push(pair.consumption);
        self.risky.push(pair.risky);
    }

    /// Number of periods.
    #[inline]
    pub fn len(&self) -> usize {
        self.consumption.len()
    }

    /// Whether the series holds no periods.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.consumption.is_empty()
    }

    /// Consumption-growth shocks `gc[0..T]`.
    #[inline]
    pub fn consumption(&self) -> &[f64] {
        &self.consumption
    }

    /// Risky log-return shocks `re[0..T]`.
    #[inline]
    pub fn risky(&self) -> &[f64] {
        &self.risky
    }

    /// Shock pair of period `t`, if present.
    #[inline]
    pub fn get(&self, t: usize) -> Option<ShockPair> {
        Some(ShockPair {
            consumption: *self.consumption.get(t)?,
            risky: *self.risky.get(t)?,
        })
    }

    /// Iterates over the pairs in period order.
    pub fn pairs(&self) -> impl Iterator<Item = ShockPair> + '_ {
        self.consumption
            .iter()
            .zip(self.risky.iter())
            .map(|(&consumption, &risky)| ShockPair { consumption, risky })
    }
}

/// Source of correlated bivariate normal shocks.
///
/// Implementations must be deterministic given the generator state: the same
/// seed, mean, covariance and size yield bit-identical series. The only side
/// effect allowed is advancing `rng`.
pub trait ShockSampler: Send + Sync {
    /// Short backend name for diagnostics.
    fn name(&self) -> &'static str;

    /// Draws `n` joint shocks with the given mean and covariance.
    ///
    /// # Errors
    ///
    /// `SimulationError::InvalidParameters` at `ShockGeneration` if `n` is 0
    /// or the mean is not finite.
    fn draw(
        &self,
        mean: [f64; 2],
        covariance: &Covariance2,
        n: usize,
        rng: &mut EconRng,
    ) -> Result<ShockSeries, SimulationError>;
}

fn check_request(mean: [f64; 2], n: usize) -> Result<(), SimulationError> {
    if n == 0 {
        return Err(SimulationError::invalid_at(
            Stage::ShockGeneration,
            "horizon",
            "at least one period must be drawn",
        ));
    }
    if !mean.iter().all(|m| m.is_finite()) {
        return Err(SimulationError::invalid_at(
            Stage::ShockGeneration,
            "mean",
            format!("shock mean must be finite, got {:?}", mean),
        ));
    }
    Ok(())
}

fn draw_with<F>(mean: [f64; 2], n: usize, rng: &mut EconRng, factor: F) -> ShockSeries
where
    F: Fn([f64; 2]) -> [f64; 2],
{
    let mut series = ShockSeries::with_capacity(n);
    for _ in 0..n {
        let [x, y] = factor(rng.gen_normal_pair());
        series.push(ShockPair {
            consumption: mean[0] + x,
            risky: mean[1] + y,
        });
    }
    series
}

/// Sampler correlating draws with the lower Cholesky factor.
///
/// # Examples
///
/// ```rust
/// use econ_core::math::covariance::Covariance2;
/// use econ_pricing::economy::{CholeskySampler, ShockSampler};
/// use econ_pricing::rng::EconRng;
///
/// let cov = Covariance2::from_volatilities(0.02, 0.10, 0.6).unwrap();
/// let mut rng = EconRng::from_seed(1);
/// let shocks = CholeskySampler.draw([0.001, 0.005], &cov, 100, &mut rng).unwrap();
/// assert_eq!(shocks.len(), 100);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CholeskySampler;

impl ShockSampler for CholeskySampler {
    fn name(&self) -> &'static str {
        "cholesky"
    }

    fn draw(
        &self,
        mean: [f64; 2],
        covariance: &Covariance2,
        n: usize,
        rng: &mut EconRng,
    ) -> Result<ShockSeries, SimulationError> {
        check_request(mean, n)?;
        let factor = covariance.cholesky();
        debug!(n, sampler = self.name(), "drawing shocks");
        Ok(draw_with(mean, n, rng, |z| factor.transform(z)))
    }
}

/// Sampler correlating draws with the spectral factor `V * sqrt(Λ)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpectralSampler;

impl ShockSampler for SpectralSampler {
    fn name(&self) -> &'static str {
        "spectral"
    }

    fn draw(
        &self,
        mean: [f64; 2],
        covariance: &Covariance2,
        n: usize,
        rng: &mut EconRng,
    ) -> Result<ShockSeries, SimulationError> {
        check_request(mean, n)?;
        let factor = covariance.spectral();
        debug!(n, sampler = self.name(), "drawing shocks");
        Ok(draw_with(mean, n, rng, |z| factor.transform(z)))
    }
}

/// Runtime selection of a sampler backend.
///
/// Parses from and displays as `"cholesky"` / `"spectral"`.
///
/// # Examples
///
/// ```rust
/// use econ_pricing::economy::SamplerKind;
///
/// let kind: SamplerKind = "spectral".parse().unwrap();
/// assert_eq!(kind, SamplerKind::Spectral);
/// assert_eq!(SamplerKind::default().to_string(), "cholesky");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SamplerKind {
    /// [`CholeskySampler`].
    #[default]
    Cholesky,
    /// [`SpectralSampler`].
    Spectral,
}

impl fmt::Display for SamplerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SamplerKind::Cholesky => f.write_str("cholesky"),
            SamplerKind::Spectral => f.write_str("spectral"),
        }
    }
}

impl FromStr for SamplerKind {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cholesky" => Ok(SamplerKind::Cholesky),
            "spectral" | "eigen" => Ok(SamplerKind::Spectral),
            other => Err(SimulationError::invalid(
                "sampler",
                format!("unknown sampler '{}', expected cholesky or spectral", other),
            )),
        }
    }
}

impl ShockSampler for SamplerKind {
    fn name(&self) -> &'static str {
        match self {
            SamplerKind::Cholesky => CholeskySampler.name(),
            SamplerKind::Spectral => SpectralSampler.name(),
        }
    }

    fn draw(
        &self,
        mean: [f64; 2],
        covariance: &Covariance2,
        n: usize,
        rng: &mut EconRng,
    ) -> Result<ShockSeries, SimulationError> {
        match self {
            SamplerKind::Cholesky => CholeskySampler.draw(mean, covariance, n, rng),
            SamplerKind::Spectral => SpectralSampler.draw(mean, covariance, n, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use econ_core::math::stats::{mean, sample_covariance, sample_std_dev};

    fn default_cov() -> Covariance2 {
        Covariance2::from_volatilities(0.02, 0.10, 0.6).unwrap()
    }

    fn check_moments(sampler: &dyn ShockSampler) {
        let mut rng = EconRng::from_seed(2024);
        let shocks = sampler
            .draw([0.001, 0.005], &default_cov(), 200_000, &mut rng)
            .unwrap();

        let gc = shocks.consumption();
        let re = shocks.risky();
        assert_relative_eq!(mean(gc).unwrap(), 0.001, epsilon = 2e-4);
        assert_relative_eq!(mean(re).unwrap(), 0.005, epsilon = 1e-3);
        assert_relative_eq!(sample_std_dev(gc).unwrap(), 0.02, max_relative = 0.01);
        assert_relative_eq!(sample_std_dev(re).unwrap(), 0.10, max_relative = 0.01);

        let corr = sample_covariance(gc, re).unwrap()
            / (sample_std_dev(gc).unwrap() * sample_std_dev(re).unwrap());
        assert_relative_eq!(corr, 0.6, epsilon = 0.01);
    }

    #[test]
    fn test_cholesky_moments() {
        check_moments(&CholeskySampler);
    }

    #[test]
    fn test_spectral_moments() {
        check_moments(&SpectralSampler);
    }

    #[test]
    fn test_same_seed_bit_identical() {
        for kind in [SamplerKind::Cholesky, SamplerKind::Spectral] {
            let a = kind
                .draw([0.001, 0.005], &default_cov(), 1000, &mut EconRng::from_seed(9))
                .unwrap();
            let b = kind
                .draw([0.001, 0.005], &default_cov(), 1000, &mut EconRng::from_seed(9))
                .unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_draw_order_is_z1_then_z2() {
        let cov = Covariance2::from_volatilities(1.0, 1.0, 0.0).unwrap();
        let shocks = CholeskySampler
            .draw([0.0, 0.0], &cov, 1, &mut EconRng::from_seed(3))
            .unwrap();

        let [z1, z2] = EconRng::from_seed(3).gen_normal_pair();
        assert_eq!(shocks.get(0), Some(ShockPair { consumption: z1, risky: z2 }));
    }

    #[test]
    fn test_zero_variance_returns_mean() {
        let cov = Covariance2::from_volatilities(0.0, 0.0, 0.6).unwrap();
        for kind in [SamplerKind::Cholesky, SamplerKind::Spectral] {
            let shocks = kind
                .draw([0.001, 0.005], &cov, 50, &mut EconRng::from_seed(0))
                .unwrap();
            assert!(shocks.consumption().iter().all(|&x| x == 0.001));
            assert!(shocks.risky().iter().all(|&x| x == 0.005));
        }
    }

    #[test]
    fn test_rejects_empty_request_and_bad_mean() {
        let mut rng = EconRng::from_seed(0);
        let err = CholeskySampler
            .draw([0.0, 0.0], &default_cov(), 0, &mut rng)
            .unwrap_err();
        assert_eq!(err.stage(), Stage::ShockGeneration);

        assert!(SpectralSampler
            .draw([f64::NAN, 0.0], &default_cov(), 10, &mut rng)
            .is_err());
    }

    #[test]
    fn test_from_columns_length_mismatch() {
        assert!(ShockSeries::from_columns(vec![0.0; 3], vec![0.0; 2]).is_err());
        let series = ShockSeries::from_columns(vec![0.1, 0.2], vec![0.3, 0.4]).unwrap();
        assert_eq!(series.pairs().count(), 2);
        assert_eq!(series.get(2), None);
    }

    #[test]
    fn test_sampler_kind_parsing() {
        assert_eq!("Cholesky".parse::<SamplerKind>().unwrap(), SamplerKind::Cholesky);
        assert_eq!(" eigen ".parse::<SamplerKind>().unwrap(), SamplerKind::Spectral);
        assert!("svd".parse::<SamplerKind>().is_err());
        assert_eq!(SamplerKind::Spectral.name(), "spectral");
    }
}
