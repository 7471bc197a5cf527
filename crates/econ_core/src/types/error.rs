//! Error types for structured error handling.
//!
//! This module provides:
//! - `Stage`: Identifies which pipeline stage raised an error
//! - `SimulationError`: Errors from the economy simulation pipeline and the price smoother
//! - `ScoringError`: Errors from the equity scoring rubric and DCF helper

use std::fmt;
use thiserror::Error;

/// Pipeline stage of the economy simulator.
///
/// Every [`SimulationError`] carries the stage it originated from so that a
/// failed run can be diagnosed without re-running it.
///
/// # Examples
/// ```
/// use econ_core::types::Stage;
///
/// assert_eq!(format!("{}", Stage::PathBuilding), "path building");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Stage {
    /// Parameter validation, before any simulation work.
    Validation,
    /// Correlated shock generation.
    ShockGeneration,
    /// Consumption and surplus path construction.
    PathBuilding,
    /// Marginal utility and SDF derivation.
    KernelDerivation,
    /// Reduction of series to scalar moments.
    MomentEstimation,
    /// Recursive price smoothing (peer utility).
    Smoothing,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Validation => "validation",
            Stage::ShockGeneration => "shock generation",
            Stage::PathBuilding => "path building",
            Stage::KernelDerivation => "kernel derivation",
            Stage::MomentEstimation => "moment estimation",
            Stage::Smoothing => "smoothing",
        };
        f.write_str(name)
    }
}

/// Categorised simulation errors.
///
/// All variants abort the pipeline; no partial result is ever returned.
/// Surplus-floor engagement is informational and therefore not an error
/// (see `ClampReport` in `econ_pricing`).
///
/// # Variants
/// - `InvalidParameters`: Malformed inputs detected before work begins
/// - `DegenerateMean`: A reduction denominator evaluated to zero or non-finite
/// - `NonFiniteValue`: A derived series overflowed
///
/// # Examples
/// ```
/// use econ_core::types::{SimulationError, Stage};
///
/// let err = SimulationError::invalid("sigma_c", "must be non-negative, got -0.1");
/// assert_eq!(err.stage(), Stage::Validation);
/// assert!(format!("{}", err).contains("sigma_c"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SimulationError {
    /// Invalid parameter value.
    #[error("Invalid parameter '{name}' during {stage}: {reason}")]
    InvalidParameters {
        /// Stage that rejected the parameter
        stage: Stage,
        /// Parameter name
        name: &'static str,
        /// Description of the invalid value
        reason: String,
    },

    /// Mean of a series is zero or non-finite where it is used as a denominator.
    #[error("Degenerate mean of {series} during {stage}: {value}")]
    DegenerateMean {
        /// Stage performing the reduction
        stage: Stage,
        /// Name of the reduced series
        series: &'static str,
        /// The offending mean
        value: f64,
    },

    /// A derived series contains a non-finite value.
    #[error("Non-finite value in {series} at index {index} during {stage}")]
    NonFiniteValue {
        /// Stage that derived the series
        stage: Stage,
        /// Name of the series
        series: &'static str,
        /// First offending index
        index: usize,
    },
}

impl SimulationError {
    /// Creates an `InvalidParameters` error raised during validation.
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameters {
            stage: Stage::Validation,
            name,
            reason: reason.into(),
        }
    }

    /// Creates an `InvalidParameters` error raised by a specific stage.
    pub fn invalid_at(stage: Stage, name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameters {
            stage,
            name,
            reason: reason.into(),
        }
    }

    /// Returns the stage the error originated from.
    pub fn stage(&self) -> Stage {
        match self {
            Self::InvalidParameters { stage, .. }
            | Self::DegenerateMean { stage, .. }
            | Self::NonFiniteValue { stage, .. } => *stage,
        }
    }
}

/// Errors from the equity scoring rubric.
///
/// # Examples
/// ```
/// use econ_core::types::ScoringError;
///
/// let err = ScoringError::InvalidParameters {
///     name: "discount",
///     reason: "must exceed terminal growth".to_string(),
/// };
/// assert!(format!("{}", err).contains("discount"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ScoringError {
    /// Invalid valuation input.
    #[error("Invalid scoring parameter '{name}': {reason}")]
    InvalidParameters {
        /// Parameter name
        name: &'static str,
        /// Description of the invalid value
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameters_display() {
        let err = SimulationError::invalid("rho_ce", "must lie in [-1, 1], got 1.5");
        let msg = format!("{}", err);
        assert!(msg.contains("rho_ce"));
        assert!(msg.contains("validation"));
        assert!(msg.contains("1.5"));
    }

    #[test]
    fn test_stage_is_reported() {
        let err = SimulationError::DegenerateMean {
            stage: Stage::MomentEstimation,
            series: "sdf",
            value: 0.0,
        };
        assert_eq!(err.stage(), Stage::MomentEstimation);
        assert!(format!("{}", err).contains("sdf"));

        let err = SimulationError::NonFiniteValue {
            stage: Stage::KernelDerivation,
            series: "marginal_utility",
            index: 7,
        };
        assert_eq!(err.stage(), Stage::KernelDerivation);
        assert!(format!("{}", err).contains("index 7"));
    }

    #[test]
    fn test_invalid_at_keeps_stage() {
        let err = SimulationError::invalid_at(Stage::ShockGeneration, "covariance", "not PSD");
        assert_eq!(err.stage(), Stage::ShockGeneration);
    }

    #[test]
    fn test_error_trait_object() {
        let err: Box<dyn std::error::Error> =
            Box::new(SimulationError::invalid("horizon", "must be positive"));
        assert!(err.to_string().contains("horizon"));
    }
}
