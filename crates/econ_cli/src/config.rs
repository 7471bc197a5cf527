//! CLI configuration management.
//!
//! Handles loading of `econ.toml` with environment variable overrides:
//!
//! | variable       | field                  |
//! |----------------|------------------------|
//! | `ECON_SEED`    | `simulation.seed`      |
//! | `ECON_HORIZON` | `simulation.horizon`   |
//! | `ECON_ALPHA`   | `simulation.alpha`     |
//! | `ECON_SAMPLER` | `sampler`              |
//!
//! ```toml
//! sampler = "cholesky"
//!
//! [simulation]
//! horizon = 10000
//! alpha = 0.0
//! seed = 0
//!
//! [compare]
//! alphas = [0.0, 0.8]
//!
//! [output]
//! format = "table"
//! ```

use std::path::Path;

use econ_pricing::economy::{SamplerKind, SimulationConfig};
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::output::OutputFormat;

/// Habit intensities of the default comparison.
const DEFAULT_COMPARE_ALPHAS: [f64; 2] = [0.0, 0.8];

/// Settings of the `compare` command.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Habit intensities compared side by side.
    pub alphas: Vec<f64>,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            alphas: DEFAULT_COMPARE_ALPHAS.to_vec(),
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format.
    pub format: OutputFormat,
}

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Economy parameters.
    pub simulation: SimulationConfig,
    /// Shock sampler backend.
    pub sampler: SamplerKind,
    /// `compare` settings.
    pub compare: CompareConfig,
    /// Output settings.
    pub output: OutputConfig,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or defaults when the file is absent.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides read through `lookup`; unparsable values are ignored
    /// with a warning.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("ECON_SEED") {
            match raw.trim().parse::<u64>() {
                Ok(seed) => self.simulation = self.simulation.with_seed(seed),
                Err(_) => warn!(value = %raw, "ignoring invalid ECON_SEED"),
            }
        }

        if let Some(raw) = lookup("ECON_HORIZON") {
            match raw.trim().parse::<usize>() {
                Ok(horizon) => self.simulation = self.simulation.with_horizon(horizon),
                Err(_) => warn!(value = %raw, "ignoring invalid ECON_HORIZON"),
            }
        }

        if let Some(raw) = lookup("ECON_ALPHA") {
            match raw.trim().parse::<f64>() {
                Ok(alpha) => self.simulation = self.simulation.with_alpha(alpha),
                Err(_) => warn!(value = %raw, "ignoring invalid ECON_ALPHA"),
            }
        }

        if let Some(raw) = lookup("ECON_SAMPLER") {
            match raw.parse::<SamplerKind>() {
                Ok(kind) => self.sampler = kind,
                Err(_) => warn!(value = %raw, "ignoring invalid ECON_SAMPLER"),
            }
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if let Err(e) = self.simulation.validate() {
            errors.push(format!("simulation: {}", e));
        }

        if self.compare.alphas.is_empty() {
            errors.push("compare.alphas must contain at least one value".to_string());
        }
        for alpha in &self.compare.alphas {
            if !(0.0..1.0).contains(alpha) {
                errors.push(format!("compare.alphas value {} outside [0, 1)", alpha));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file (or defaults) with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override();
        config.validate()?;
        Ok(config)
    }
}

/// Configuration error type
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
