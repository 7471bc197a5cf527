//! Compare command implementation
//!
//! Runs the configured economy once per comparison alpha on identical shocks
//! and prints the moments side by side.

use tracing::info;

use super::print_results;
use crate::config::CliConfig;
use crate::output::OutputFormat;
use crate::Result;
use econ_pricing::economy::sweep_alpha_with;

/// Run the compare command
pub fn run(config: &CliConfig, format: Option<OutputFormat>) -> Result<()> {
    let alphas = &config.compare.alphas;
    info!("Comparing habit intensities {:?}", alphas);
    info!("  Horizon: {}", config.simulation.horizon());
    info!("  Seed: {}", config.simulation.seed());
    info!("  Sampler: {}", config.sampler);

    let results = sweep_alpha_with(&config.simulation, alphas, &config.sampler)?;

    print_results(&results, format.unwrap_or(config.output.format))?;

    info!("Comparison complete");
    Ok(())
}
