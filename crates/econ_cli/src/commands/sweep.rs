//! Sweep command implementation

use tracing::info;

use super::print_results;
use crate::config::CliConfig;
use crate::output::OutputFormat;
use crate::Result;
use econ_pricing::economy::sweep_alpha_with;

/// Run the sweep command over `alphas`, sharing the configured seed.
pub fn run(config: &CliConfig, alphas: &[f64], format: Option<OutputFormat>) -> Result<()> {
    info!("Sweeping {} habit intensities", alphas.len());
    info!("  Horizon: {}", config.simulation.horizon());
    info!("  Seed: {}", config.simulation.seed());

    let results = sweep_alpha_with(&config.simulation, alphas, &config.sampler)?;

    print_results(&results, format.unwrap_or(config.output.format))?;

    info!("Sweep complete");
    Ok(())
}
