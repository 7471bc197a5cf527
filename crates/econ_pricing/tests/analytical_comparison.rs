//! Analytical comparison tests for the habit economy.
//!
//! With `alpha = 0` the SDF is `beta * exp(-gamma * gc)` and the risky return
//! is `exp(re)`, so the simulated moments must converge to lognormal closed
//! forms.
//!
//! # Test Categories
//!
//! 1. **Default economy**: recorded reference moments, lognormal formulas
//! 2. **Zero variance**: deterministic economy, exact formulas
//! 3. **Habit effect**: alpha = 0.8 lowers the risk-free rate

use approx::assert_relative_eq;
use econ_pricing::economy::{
    simulate, simulate_detailed, simulate_with, SamplerKind, SimulationConfig,
};
use econ_pricing::rng::EconRng;

/// `E[M] = beta * exp(-gamma * mu_c + gamma^2 * sigma_c^2 / 2)`.
fn closed_form_rf(config: &SimulationConfig) -> f64 {
    let g = config.gamma();
    let expected_sdf =
        config.beta() * (-g * config.mu_c() + 0.5 * g * g * config.sigma_c().powi(2)).exp();
    1.0 / expected_sdf
}

/// `E[Re] = exp(mu_e + sigma_e^2 / 2)`.
fn closed_form_re(config: &SimulationConfig) -> f64 {
    (config.mu_e() + 0.5 * config.sigma_e().powi(2)).exp()
}

/// `E[M * Re] - 1` for jointly normal `(gc, re)`.
fn closed_form_euler_residual(config: &SimulationConfig) -> f64 {
    let g = config.gamma();
    let (sc, se, rho) = (config.sigma_c(), config.sigma_e(), config.rho_ce());
    let drift = -g * config.mu_c() + config.mu_e();
    let variance = g * g * sc * sc + se * se - 2.0 * g * rho * sc * se;
    config.beta() * (drift + 0.5 * variance).exp() - 1.0
}

// ============================================================================
// Default Economy Tests
// ============================================================================

#[test]
fn test_default_economy_matches_lognormal_moments() {
    let config = SimulationConfig::default();
    let result = simulate(&config).unwrap();

    // Sampling error of the means at T = 10_000 is about 4e-4 (Rf) and 1e-3 (Re).
    assert_relative_eq!(result.rf_mean, closed_form_rf(&config), epsilon = 3e-3);
    assert_relative_eq!(result.re_mean, closed_form_re(&config), epsilon = 5e-3);
    assert_relative_eq!(
        result.euler_residual,
        closed_form_euler_residual(&config),
        epsilon = 5e-3
    );
    assert_eq!(result.alpha, 0.0);
    assert_eq!(result.clamped_periods, 0);
    assert_eq!(result.equity_premium, result.re_mean - result.rf_mean);
}

/// Recorded moments of the default economy (StdRng stream, Cholesky sampler).
/// A change here means the shock stream or a stage changed.
#[test]
fn test_default_economy_reference_triple() {
    let config = SimulationConfig::default();

    let plain = simulate(&config).unwrap();
    assert_relative_eq!(plain.rf_mean, 1.011216987713, epsilon = 1e-9);
    assert_relative_eq!(plain.re_mean, 1.009038694561, epsilon = 1e-9);
    assert_relative_eq!(plain.equity_premium, -0.002178293152, epsilon = 1e-9);
    assert_eq!(plain.clamped_periods, 0);

    let habit = simulate(&config.with_alpha(0.8)).unwrap();
    assert_relative_eq!(habit.rf_mean, 0.977362952657, epsilon = 1e-9);
    assert_relative_eq!(habit.re_mean, 1.009038694561, epsilon = 1e-9);
    assert_relative_eq!(habit.equity_premium, 0.031675741904, epsilon = 1e-9);
    assert_eq!(habit.clamped_periods, 0);
}

#[test]
fn test_default_economy_is_reproducible() {
    let config = SimulationConfig::default();

    let first = simulate_detailed(&config).unwrap();
    let second = simulate_detailed(&config).unwrap();

    assert_eq!(first.shocks, second.shocks);
    assert_eq!(first.result, second.result);
    assert_eq!(
        first.result.rf_mean.to_bits(),
        second.result.rf_mean.to_bits(),
        "risk-free rate must be bit-identical across runs"
    );
}

#[test]
fn test_spectral_backend_matches_lognormal_moments() {
    let config = SimulationConfig::default();
    let mut rng = EconRng::from_seed(config.seed());
    let result = simulate_with(&config, &SamplerKind::Spectral, &mut rng)
        .unwrap()
        .result;

    assert_relative_eq!(result.rf_mean, closed_form_rf(&config), epsilon = 3e-3);
    assert_relative_eq!(result.re_mean, closed_form_re(&config), epsilon = 5e-3);
}

// ============================================================================
// Zero Variance Tests
// ============================================================================

#[test]
fn test_zero_variance_economy_is_exact() {
    let config = SimulationConfig::builder()
        .consumption_shock(0.001, 0.0)
        .risky_shock(0.005, 0.0)
        .build()
        .unwrap();

    let result = simulate(&config).unwrap();

    assert_relative_eq!(result.re_mean, 0.005_f64.exp(), max_relative = 1e-10);
    assert_relative_eq!(
        result.rf_mean,
        (2.0 * 0.001_f64).exp() / 0.99,
        max_relative = 1e-10
    );
    assert_eq!(result.clamped_periods, 0);

    // Any seed gives the same deterministic economy.
    let reseeded = simulate(&config.with_seed(12345)).unwrap();
    assert_relative_eq!(reseeded.rf_mean, result.rf_mean, max_relative = 1e-15);
    assert_relative_eq!(reseeded.re_mean, result.re_mean, max_relative = 1e-15);
}

// ============================================================================
// Habit Effect Tests
// ============================================================================

#[test]
fn test_habit_lowers_risk_free_rate() {
    let no_habit = SimulationConfig::default();
    let habit = no_habit.with_alpha(0.8);

    let base = simulate(&no_habit).unwrap();
    let with_habit = simulate(&habit).unwrap();

    assert!(
        with_habit.rf_mean < base.rf_mean,
        "alpha=0.8 Rf {} should be below alpha=0 Rf {}",
        with_habit.rf_mean,
        base.rf_mean
    );
    // Same shocks: the risky leg is unchanged.
    assert_eq!(with_habit.re_mean, base.re_mean);
    assert!(with_habit.equity_premium > base.equity_premium);
}
