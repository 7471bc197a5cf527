//! Single-run entry points.
//!
//! A run validates its configuration, then executes the four stages in
//! order. Any failure aborts the run; no partial result is returned.

use econ_core::types::SimulationError;
use serde::Serialize;
use tracing::{debug, info_span};

use super::config::SimulationConfig;
use super::kernel::{derive_kernel, MarginalUtilitySeries, SdfSeries};
use super::moments::{estimate_moments, PricingResult, RiskyReturnSeries};
use super::paths::{build_paths, ClampReport, ConsumptionPath, SurplusPath};
use super::shocks::{CholeskySampler, ShockSampler, ShockSeries};
use crate::rng::EconRng;

/// Every intermediate series of one run plus its [`PricingResult`].
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationOutput {
    /// Drawn shocks, `T` pairs.
    pub shocks: ShockSeries,
    /// Consumption levels, `T + 1` values.
    pub consumption: ConsumptionPath,
    /// Surplus consumption and its clamp report, `T + 1` values.
    pub surplus: SurplusPath,
    /// Marginal utility, `T + 1` values.
    pub marginal_utility: MarginalUtilitySeries,
    /// One-period SDF, `T` values.
    pub sdf: SdfSeries,
    /// Gross risky returns, `T` values.
    pub risky_returns: RiskyReturnSeries,
    /// Reduced moments.
    pub result: PricingResult,
}

/// One row of a run's period-by-period export.
///
/// Period `t` carries the state levels at `t` and the shock, SDF and return
/// that take the economy from `t` to `t + 1`; the last row (`t = T`) has no
/// forward-looking values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PeriodRecord {
    /// Period index.
    pub t: usize,
    /// Consumption level `C[t]`.
    pub consumption: f64,
    /// Surplus consumption `surplus[t]`.
    pub surplus: f64,
    /// Whether the floor replaced the raw surplus at `t`.
    pub clamped: bool,
    /// Marginal utility `m[t]`.
    pub marginal_utility: f64,
    /// Consumption-growth shock `gc[t]`.
    pub consumption_shock: Option<f64>,
    /// Risky log-return shock `re[t]`.
    pub risky_shock: Option<f64>,
    /// SDF `M[t]`.
    pub sdf: Option<f64>,
    /// Gross risky return `Re[t]`.
    pub risky_return: Option<f64>,
}

impl SimulationOutput {
    /// Clamp report of the surplus path.
    #[inline]
    pub fn clamp_report(&self) -> &ClampReport {
        self.surplus.clamp_report()
    }

    /// Flattens the run into `T + 1` period rows.
    pub fn period_records(&self) -> Vec<PeriodRecord> {
        let clamped = self.clamp_report().indices();
        let mut next_clamp = clamped.iter().peekable();

        self.consumption
            .levels()
            .iter()
            .zip(self.surplus.values())
            .zip(self.marginal_utility.values())
            .enumerate()
            .map(|(t, ((&consumption, &surplus), &marginal_utility))| {
                let is_clamped = next_clamp.next_if(|&&i| i == t).is_some();
                let shock = self.shocks.get(t);
                PeriodRecord {
                    t,
                    consumption,
                    surplus,
                    clamped: is_clamped,
                    marginal_utility,
                    consumption_shock: shock.map(|s| s.consumption),
                    risky_shock: shock.map(|s| s.risky),
                    sdf: self.sdf.values().get(t).copied(),
                    risky_return: self.risky_returns.values().get(t).copied(),
                }
            })
            .collect()
    }
}

/// Runs the pipeline with an explicit sampler and generator handle.
///
/// The configuration's own seed is ignored; `rng` is the only source of
/// randomness and is advanced by exactly `2 * T` standard normal draws.
///
/// # Errors
///
/// Any [`SimulationError`] raised by validation or one of the stages.
///
/// # Examples
///
/// ```rust
/// use econ_pricing::economy::{simulate_with, SimulationConfig, SpectralSampler};
/// use econ_pricing::rng::EconRng;
///
/// let config = SimulationConfig::builder().horizon(100).build().unwrap();
/// let mut rng = EconRng::from_seed(11);
/// let output = simulate_with(&config, &SpectralSampler, &mut rng).unwrap();
///
/// assert_eq!(output.shocks.len(), 100);
/// assert_eq!(output.consumption.len(), 101);
/// assert_eq!(output.sdf.len(), 100);
/// ```
pub fn simulate_with<S>(
    config: &SimulationConfig,
    sampler: &S,
    rng: &mut EconRng,
) -> Result<SimulationOutput, SimulationError>
where
    S: ShockSampler + ?Sized,
{
    config.validate()?;

    let span = info_span!("simulate", alpha = config.alpha(), horizon = config.horizon());
    let _enter = span.enter();

    let covariance = config.covariance()?;
    let shocks = sampler.draw(config.shock_mean(), &covariance, config.horizon(), rng)?;

    let (consumption, surplus) = build_paths(shocks.consumption(), config.alpha())?;
    let (marginal_utility, sdf) = derive_kernel(&surplus, config.beta(), config.gamma())?;
    let risky_returns = RiskyReturnSeries::from_log_returns(shocks.risky())?;
    let result = estimate_moments(config.alpha(), &sdf, &risky_returns, surplus.clamp_report())?;

    debug!(
        rf_mean = result.rf_mean,
        re_mean = result.re_mean,
        equity_premium = result.equity_premium,
        "run complete"
    );

    Ok(SimulationOutput {
        shocks,
        consumption,
        surplus,
        marginal_utility,
        sdf,
        risky_returns,
        result,
    })
}

/// Runs the pipeline with the default sampler, seeded from the configuration.
///
/// # Errors
///
/// Any [`SimulationError`] raised by validation or one of the stages.
pub fn simulate_detailed(config: &SimulationConfig) -> Result<SimulationOutput, SimulationError> {
    let mut rng = EconRng::from_seed(config.seed());
    simulate_with(config, &CholeskySampler, &mut rng)
}

/// Runs the pipeline and returns only the pricing moments.
///
/// # Errors
///
/// Any [`SimulationError`] raised by validation or one of the stages.
///
/// # Examples
///
/// ```rust
/// use econ_pricing::economy::{simulate, SimulationConfig};
///
/// let config = SimulationConfig::default();
/// let first = simulate(&config).unwrap();
/// let second = simulate(&config).unwrap();
/// assert_eq!(first, second);
/// ```
pub fn simulate(config: &SimulationConfig) -> Result<PricingResult, SimulationError> {
    simulate_detailed(config).map(|output| output.result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::economy::paths::SURPLUS_FLOOR;
    use econ_core::types::Stage;

    #[test]
    fn test_invalid_config_fails_at_validation() {
        let config = SimulationConfig::default().with_horizon(0);
        let err = simulate(&config).unwrap_err();
        assert_eq!(err.stage(), Stage::Validation);
    }

    #[test]
    fn test_rng_advanced_by_two_draws_per_period() {
        let config = SimulationConfig::builder().horizon(25).build().unwrap();
        let mut rng = EconRng::from_seed(5);
        simulate_with(&config, &CholeskySampler, &mut rng).unwrap();

        let mut reference = EconRng::from_seed(5);
        for _ in 0..50 {
            reference.gen_normal();
        }
        assert_eq!(rng.gen_normal(), reference.gen_normal());
    }

    #[test]
    fn test_period_records_align() {
        let config = SimulationConfig::builder()
            .horizon(200)
            .alpha(0.9)
            .consumption_shock(0.0, 0.2)
            .build()
            .unwrap();
        let output = simulate_detailed(&config).unwrap();
        let rows = output.period_records();

        assert_eq!(rows.len(), 201);
        assert_eq!(rows[0].consumption, 1.0);
        assert_eq!(rows[0].consumption_shock, Some(output.shocks.consumption()[0]));
        assert_eq!(rows[199].sdf, Some(output.sdf.values()[199]));
        assert_eq!(rows[200].sdf, None);
        assert_eq!(rows[200].risky_return, None);

        let flagged: Vec<usize> = rows.iter().filter(|r| r.clamped).map(|r| r.t).collect();
        assert_eq!(flagged, output.clamp_report().indices());
        for t in flagged {
            assert_eq!(rows[t].surplus, SURPLUS_FLOOR);
        }
    }
}
