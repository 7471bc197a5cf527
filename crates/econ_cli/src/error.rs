//! CLI error types.

use econ_core::types::{ScoringError, SimulationError};
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Malformed command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be loaded or validated
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Simulation pipeline failure
    #[error("Simulation failed: {0}")]
    Simulation(#[from] SimulationError),

    /// Scoring rubric failure
    #[error("Scoring failed: {0}")]
    Scoring(#[from] ScoringError),

    /// Input file could not be parsed
    #[error("Parse error in {path}: {message}")]
    Parse {
        /// File being parsed
        path: String,
        /// Parser message
        message: String,
    },

    /// JSON output failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV export failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulation_error_converts() {
        let err: CliError = SimulationError::invalid("alpha", "must lie in [0, 1)").into();
        let msg = err.to_string();
        assert!(msg.starts_with("Simulation failed"));
        assert!(msg.contains("alpha"));
    }

    #[test]
    fn test_config_error_converts() {
        let err: CliError = ConfigError::Validation(vec!["horizon".to_string()]).into();
        assert!(err.to_string().contains("horizon"));
    }
}
