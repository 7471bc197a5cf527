//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod compare;
pub mod replicate;
pub mod score;
pub mod simulate;
pub mod smooth;
pub mod sweep;

use crate::output::{render_json, render_results_table, OutputFormat};
use crate::Result;
use econ_pricing::economy::PricingResult;

/// Prints pricing results in the requested format.
pub(crate) fn print_results(results: &[PricingResult], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print!("{}", render_results_table(results)),
        OutputFormat::Json => println!("{}", render_json(results)?),
    }
    Ok(())
}
