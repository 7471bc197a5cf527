//! econ - Command Line Operations for the Habit-Formation Economy
//!
//! Operational entry point of the workspace: simulates the economy, compares
//! habit intensities and exposes the peer valuation tools.
//!
//! # Commands
//!
//! - `econ compare` - Run the configured alphas side by side (default)
//! - `econ simulate` - Run one economy, optionally exporting its paths
//! - `econ sweep --alphas 0,0.5,0.8` - Run a list of alphas on shared shocks
//! - `econ replicate --runs N` - Sampling dispersion across derived seeds
//! - `econ smooth --prices ...` - Kalman-smooth a price sequence
//! - `econ score --input stock.toml` - Score a stock profile
//! - `econ check` - Validate the loaded configuration
//!
//! Logs are written to stderr; `RUST_LOG` overrides the level chosen by
//! `--verbose`.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use commands::simulate::SimulateArgs;
use config::CliConfig;
use econ_core::math::smoothing::{DEFAULT_MEASUREMENT_VARIANCE, DEFAULT_PROCESS_VARIANCE};
use output::OutputFormat;

/// Habit-formation asset pricing simulator
#[derive(Parser)]
#[command(name = "econ")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "econ.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare the configured habit intensities on identical shocks
    Compare {
        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Run a single economy
    Simulate(SimulateArgs),

    /// Run a list of habit intensities on identical shocks
    Sweep {
        /// Comma-separated habit intensities
        #[arg(short, long, value_delimiter = ',', default_value = "0,0.5,0.8")]
        alphas: Vec<f64>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Re-run the economy on independent derived seeds
    Replicate {
        /// Number of runs
        #[arg(short = 'n', long, default_value = "16")]
        runs: usize,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Smooth an ordered price sequence
    Smooth {
        /// Comma-separated observed prices
        #[arg(short, long, value_delimiter = ',', required = true)]
        prices: Vec<f64>,

        /// Process variance
        #[arg(short, long, default_value_t = DEFAULT_PROCESS_VARIANCE)]
        q: f64,

        /// Measurement variance
        #[arg(short, long, default_value_t = DEFAULT_MEASUREMENT_VARIANCE)]
        r: f64,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Score a stock profile read from TOML
    Score {
        /// Path to the stock profile
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Validate the configuration and print the effective values
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    debug!("Loading configuration from {}", cli.config.display());
    let config = CliConfig::load_with_env_and_validate(&cli.config)
        .with_context(|| format!("loading configuration from {}", cli.config.display()))?;

    let default_format = config.output.format;
    let command = cli.command.unwrap_or(Commands::Compare { format: None });

    match command {
        Commands::Compare { format } => commands::compare::run(&config, format),
        Commands::Simulate(args) => commands::simulate::run(&config, &args),
        Commands::Sweep { alphas, format } => commands::sweep::run(&config, &alphas, format),
        Commands::Replicate { runs, format } => commands::replicate::run(&config, runs, format),
        Commands::Smooth {
            prices,
            q,
            r,
            format,
        } => commands::smooth::run(&prices, q, r, format.unwrap_or(default_format)),
        Commands::Score { input, format } => {
            commands::score::run(&input, format.unwrap_or(default_format))
        }
        Commands::Check => commands::check::run(&config),
    }
    .context("command failed")?;

    info!("Done");
    Ok(())
}
