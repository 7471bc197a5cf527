//! Parallel execution of independent runs.
//!
//! Runs share nothing but their configuration: each receives its own
//! [`EconRng`](crate::rng::EconRng) from an [`RngFactory`] and results are
//! returned in input order regardless of scheduling.
//!
//! - [`sweep_alpha`]: same seed for every run, so all alphas see identical
//!   shocks and differ only through the habit
//! - [`replicate`]: derived seed per run, for sampling error estimates

use econ_core::math::stats::{mean, sample_std_dev};
use econ_core::types::SimulationError;
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use super::config::SimulationConfig;
use super::moments::PricingResult;
use super::pipeline::simulate_with;
use super::shocks::{CholeskySampler, ShockSampler};
use crate::rng::RngFactory;

/// Runs one simulation per habit intensity, holding the shocks fixed.
///
/// Uses the default [`CholeskySampler`].
///
/// # Errors
///
/// The first failing run's error, in input order. Every alpha is validated
/// by the run that uses it.
///
/// # Examples
///
/// ```rust
/// use econ_pricing::economy::{sweep_alpha, SimulationConfig};
///
/// let config = SimulationConfig::builder().horizon(1_000).build().unwrap();
/// let results = sweep_alpha(&config, &[0.0, 0.5]).unwrap();
///
/// assert_eq!(results.len(), 2);
/// assert_eq!(results[1].alpha, 0.5);
/// // Identical shocks: the risky leg does not depend on alpha.
/// assert_eq!(results[0].re_mean, results[1].re_mean);
/// ```
pub fn sweep_alpha(
    config: &SimulationConfig,
    alphas: &[f64],
) -> Result<Vec<PricingResult>, SimulationError> {
    sweep_alpha_with(config, alphas, &CholeskySampler)
}

/// [`sweep_alpha`] with an explicit sampler backend.
///
/// # Errors
///
/// See [`sweep_alpha`].
pub fn sweep_alpha_with<S>(
    config: &SimulationConfig,
    alphas: &[f64],
    sampler: &S,
) -> Result<Vec<PricingResult>, SimulationError>
where
    S: ShockSampler + ?Sized,
{
    let factory = RngFactory::new(config.seed());
    info!(runs = alphas.len(), seed = config.seed(), "alpha sweep");

    alphas
        .par_iter()
        .map(|&alpha| {
            let run_config = config.with_alpha(alpha);
            let mut rng = factory.base_stream();
            simulate_with(&run_config, sampler, &mut rng).map(|output| output.result)
        })
        .collect()
}

/// Mean and dispersion of one moment across replications.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MomentSummary {
    /// Mean across runs.
    pub mean: f64,
    /// Sample standard deviation across runs; `None` for a single run.
    pub std_dev: Option<f64>,
}

impl MomentSummary {
    fn from_values(values: &[f64]) -> Self {
        Self {
            mean: mean(values).unwrap_or(f64::NAN),
            std_dev: sample_std_dev(values),
        }
    }
}

/// Results of independent replications of one configuration.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReplicationSummary {
    /// Base seed the per-run seeds were derived from.
    pub base_seed: u64,
    /// Per-run results in replication order.
    pub runs: Vec<PricingResult>,
    /// Risk-free rate across runs.
    pub rf_mean: MomentSummary,
    /// Mean risky return across runs.
    pub re_mean: MomentSummary,
    /// Equity premium across runs.
    pub equity_premium: MomentSummary,
    /// Euler residual across runs.
    pub euler_residual: MomentSummary,
}

impl ReplicationSummary {
    fn from_runs(base_seed: u64, runs: Vec<PricingResult>) -> Self {
        let column = |f: fn(&PricingResult) -> f64| -> Vec<f64> { runs.iter().map(f).collect() };
        let rf = column(|r| r.rf_mean);
        let re = column(|r| r.re_mean);
        let ep = column(|r| r.equity_premium);
        let euler = column(|r| r.euler_residual);

        Self {
            base_seed,
            rf_mean: MomentSummary::from_values(&rf),
            re_mean: MomentSummary::from_values(&re),
            equity_premium: MomentSummary::from_values(&ep),
            euler_residual: MomentSummary::from_values(&euler),
            runs,
        }
    }
}

/// Runs `n_runs` independent replications with seeds derived from the
/// configuration's seed, using the default [`CholeskySampler`].
///
/// # Errors
///
/// - `InvalidParameters` if `n_runs` is 0
/// - the first failing run's error, in replication order
pub fn replicate(
    config: &SimulationConfig,
    n_runs: usize,
) -> Result<ReplicationSummary, SimulationError> {
    replicate_with(config, n_runs, &CholeskySampler)
}

/// [`replicate`] with an explicit sampler backend.
///
/// # Errors
///
/// See [`replicate`].
pub fn replicate_with<S>(
    config: &SimulationConfig,
    n_runs: usize,
    sampler: &S,
) -> Result<ReplicationSummary, SimulationError>
where
    S: ShockSampler + ?Sized,
{
    if n_runs == 0 {
        return Err(SimulationError::invalid(
            "runs",
            "at least one replication is required",
        ));
    }
    config.validate()?;

    let factory = RngFactory::new(config.seed());
    info!(runs = n_runs, base_seed = config.seed(), "replication");

    let runs = (0..n_runs as u64)
        .into_par_iter()
        .map(|index| {
            let mut rng = factory.stream(index);
            simulate_with(config, sampler, &mut rng).map(|output| output.result)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ReplicationSummary::from_runs(config.seed(), runs))
}
