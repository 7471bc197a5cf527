//! Replicate command implementation
//!
//! Re-runs the configured economy on independent derived seeds and reports
//! the dispersion of each moment.

use tracing::info;

use crate::config::CliConfig;
use crate::output::{render_json, render_replication_table, OutputFormat};
use crate::Result;
use econ_pricing::economy::replicate_with;

/// Run the replicate command
pub fn run(config: &CliConfig, runs: usize, format: Option<OutputFormat>) -> Result<()> {
    info!("Replicating {} runs", runs);
    info!("  Alpha: {}", config.simulation.alpha());
    info!("  Horizon: {}", config.simulation.horizon());
    info!("  Base seed: {}", config.simulation.seed());

    let summary = replicate_with(&config.simulation, runs, &config.sampler)?;

    match format.unwrap_or(config.output.format) {
        OutputFormat::Table => print!("{}", render_replication_table(&summary)),
        OutputFormat::Json => println!("{}", render_json(&summary)?),
    }

    info!("Replication complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_runs_rejected() {
        let err = run(&CliConfig::default(), 0, None).unwrap_err();
        assert!(err.to_string().contains("runs"));
    }
}
