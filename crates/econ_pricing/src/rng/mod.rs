//! # Random Number Generation Infrastructure
//!
//! This module provides random number generation facilities for the economy
//! simulator.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: All generators support seeding for deterministic sequences
//! - **Explicit handles**: No process-wide generator; every run receives its own handle
//! - **Parallel safety**: [`RngFactory`] derives independent, deterministic seeds per run
//!
//! ## Module Structure
//!
//! - `prng`: Pseudo-random number generator wrapper with seed management
//! - `factory`: Per-run seed derivation
//!
//! ## Usage Example
//!
//! ```rust
//! use econ_pricing::rng::{EconRng, RngFactory};
//!
//! let mut rng = EconRng::from_seed(12345);
//! let [z1, z2] = rng.gen_normal_pair();
//! assert!(z1.is_finite() && z2.is_finite());
//!
//! let factory = RngFactory::new(12345);
//! let mut run_rng = factory.stream(3);
//! let _ = run_rng.gen_normal_pair();
//! ```

mod factory;
mod prng;

// Public re-exports
pub use factory::RngFactory;
pub use prng::EconRng;

#[cfg(test)]
mod tests;
