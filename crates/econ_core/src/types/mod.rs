//! Core error types shared across the workspace.
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Stage`], [`SimulationError`], [`ScoringError`] from `error`

pub mod error;

pub use error::{ScoringError, SimulationError, Stage};
