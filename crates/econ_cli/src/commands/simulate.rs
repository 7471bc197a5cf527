//! Simulate command implementation
//!
//! Runs a single economy, optionally exporting every period to CSV.

use std::path::PathBuf;

use clap::Args;
use tracing::{info, warn};

use super::print_results;
use crate::config::CliConfig;
use crate::output::OutputFormat;
use crate::Result;
use econ_pricing::economy::{simulate_with, SamplerKind, SimulationOutput};
use econ_pricing::rng::EconRng;

/// Arguments of `econ simulate`; unset flags fall back to the configuration.
#[derive(Debug, Clone, Default, Args)]
pub struct SimulateArgs {
    /// Habit intensity in [0, 1)
    #[arg(short, long)]
    pub alpha: Option<f64>,

    /// Seed of the shock generator
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of simulated periods
    #[arg(short = 'T', long)]
    pub horizon: Option<usize>,

    /// Shock sampler backend (cholesky, spectral)
    #[arg(long)]
    pub sampler: Option<SamplerKind>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the period-by-period series to this CSV file
    #[arg(long)]
    pub paths_out: Option<PathBuf>,
}

/// Run the simulate command
pub fn run(config: &CliConfig, args: &SimulateArgs) -> Result<()> {
    let mut simulation = config.simulation;
    if let Some(alpha) = args.alpha {
        simulation = simulation.with_alpha(alpha);
    }
    if let Some(seed) = args.seed {
        simulation = simulation.with_seed(seed);
    }
    if let Some(horizon) = args.horizon {
        simulation = simulation.with_horizon(horizon);
    }
    let sampler = args.sampler.unwrap_or(config.sampler);

    info!("Starting simulation...");
    info!("  Alpha: {}", simulation.alpha());
    info!("  Horizon: {}", simulation.horizon());
    info!("  Seed: {}", simulation.seed());
    info!("  Sampler: {}", sampler);

    let mut rng = EconRng::from_seed(simulation.seed());
    let output = simulate_with(&simulation, &sampler, &mut rng)?;

    let clamps = output.clamp_report();
    if clamps.is_clamped() {
        warn!(
            "Surplus floor engaged in {} of {} periods",
            clamps.count(),
            simulation.horizon()
        );
    }

    if let Some(path) = &args.paths_out {
        write_paths_csv(&output, path)?;
        info!("Wrote {} period rows to {}", output.consumption.len(), path.display());
    }

    print_results(&[output.result], args.format.unwrap_or(config.output.format))?;

    info!("Simulation complete");
    Ok(())
}

/// Writes one CSV row per period.
fn write_paths_csv(output: &SimulationOutput, path: &PathBuf) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in output.period_records() {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
