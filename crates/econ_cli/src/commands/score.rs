//! Score command implementation
//!
//! Reads a stock profile from TOML and prints its rubric score card.

use std::path::Path;

use tracing::{info, warn};

use crate::output::{render_json, render_score_table, OutputFormat};
use crate::{CliError, Result};
use econ_models::scoring::{total_weighted_score, StockInputs};

/// Run the score command
pub fn run(input: &Path, format: OutputFormat) -> Result<()> {
    let inputs = load_inputs(input)?;
    info!("Scoring {}", input.display());

    let card = total_weighted_score(&inputs)?;
    if card.valuation.fallback {
        warn!("Valuation inputs incomplete, using neutral valuation score");
    }

    match format {
        OutputFormat::Table => print!("{}", render_score_table(&card)),
        OutputFormat::Json => println!("{}", render_json(&card)?),
    }

    info!(
        "Total score {:.2} ({})",
        card.total_weighted_score, card.decision_band
    );
    Ok(())
}

fn load_inputs(path: &Path) -> Result<StockInputs> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| CliError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
