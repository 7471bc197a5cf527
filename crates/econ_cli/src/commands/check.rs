//! Check command implementation
//!
//! The configuration has already been loaded and validated by the time this
//! runs; it reports the effective values.

use tracing::info;

use crate::config::CliConfig;
use crate::output::render_table;
use crate::Result;

/// Run the check command
pub fn run(config: &CliConfig) -> Result<()> {
    let covariance = config.simulation.covariance()?;

    let sim = &config.simulation;
    let rows = vec![
        vec!["horizon".to_string(), sim.horizon().to_string()],
        vec!["beta".to_string(), sim.beta().to_string()],
        vec!["gamma".to_string(), sim.gamma().to_string()],
        vec!["alpha".to_string(), sim.alpha().to_string()],
        vec!["mu_c".to_string(), sim.mu_c().to_string()],
        vec!["sigma_c".to_string(), sim.sigma_c().to_string()],
        vec!["mu_e".to_string(), sim.mu_e().to_string()],
        vec!["sigma_e".to_string(), sim.sigma_e().to_string()],
        vec!["rho_ce".to_string(), sim.rho_ce().to_string()],
        vec!["seed".to_string(), sim.seed().to_string()],
        vec!["covariance".to_string(), format!("{:e}", covariance.covariance())],
        vec!["sampler".to_string(), config.sampler.to_string()],
        vec!["compare.alphas".to_string(), format!("{:?}", config.compare.alphas)],
    ];
    print!("{}", render_table(&["Parameter", "Value"], &rows));

    info!("Configuration is valid");
    Ok(())
}
