//! # econ_core: Numeric Foundation for the Habit-Formation Economy
//!
//! ## Layer 1 (Foundation) Role
//!
//! econ_core serves as the bottom layer of the workspace, providing:
//! - Error types: `SimulationError`, `ScoringError`, `Stage` (`types::error`)
//! - Sample statistics generic over `num_traits::Float` (`math::stats`)
//! - Validated 2×2 covariance matrices with Cholesky and spectral factors (`math::covariance`)
//! - Recursive one-dimensional price smoothing (`math::smoothing`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other econ_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use econ_core::math::covariance::Covariance2;
//! use econ_core::math::stats::mean;
//!
//! let cov = Covariance2::from_volatilities(0.02, 0.10, 0.6).unwrap();
//! assert!((cov.covariance() - 0.6 * 0.02 * 0.10).abs() < 1e-15);
//!
//! assert_eq!(mean(&[1.0_f64, 2.0, 3.0]), Some(2.0));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `Stage` and the error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
