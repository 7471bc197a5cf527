//! # econ_pricing: Habit-Formation Economy Engine (Layer 3)
//!
//! ## Layer 3 Role
//!
//! econ_pricing turns a [`SimulationConfig`](economy::SimulationConfig) into
//! asset-pricing moments through a strictly forward pipeline:
//!
//! 1. **Shock generation** (`economy::shocks`): T joint draws of
//!    (consumption-growth shock, risky log-return shock) from a bivariate normal
//! 2. **Path building** (`economy::paths`): consumption levels and the
//!    habit-adjusted surplus path, with every floor engagement recorded
//! 3. **Kernel derivation** (`economy::kernel`): marginal utility and the
//!    one-period stochastic discount factor
//! 4. **Moment estimation** (`economy::moments`): risk-free rate, mean risky
//!    return, equity premium and the Euler residual
//!
//! Independent runs (alpha sweeps, seed replications) are executed on rayon's
//! pool by `economy::sweep`, each with its own generator handle from
//! [`RngFactory`](rng::RngFactory).
//!
//! ## Usage Example
//!
//! ```rust
//! use econ_pricing::economy::{simulate, SimulationConfig};
//!
//! let config = SimulationConfig::builder()
//!     .horizon(2_000)
//!     .alpha(0.5)
//!     .seed(7)
//!     .build()
//!     .unwrap();
//!
//! let result = simulate(&config).unwrap();
//! assert!(result.rf_mean > 0.0);
//! assert_eq!(result.equity_premium, result.re_mean - result.rf_mean);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod economy;
pub mod rng;
