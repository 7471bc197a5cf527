//! Habit-formation economy simulator.
//!
//! This module provides:
//! - [`SimulationConfig`] and its builder
//! - Correlated shock sampling behind the [`ShockSampler`] trait
//! - Consumption and surplus path construction with [`ClampReport`]
//! - Marginal utility and SDF derivation
//! - Moment estimation into a [`PricingResult`]
//! - Single-run entry points ([`simulate`], [`simulate_detailed`], [`simulate_with`])
//! - Parallel alpha sweeps and seed replications
//!
//! # Pipeline
//!
//! ```text
//! SimulationConfig ──► ShockSeries ──► ConsumptionPath ──► SurplusPath
//!                                                              │
//! PricingResult ◄── moments ◄── SDFSeries ◄── MarginalUtility ◄┘
//! ```
//!
//! Every stage is a pure function of its inputs plus, for shock generation,
//! the supplied generator handle. A failure in any stage aborts the run and
//! reports the stage through [`SimulationError::stage`](econ_core::types::SimulationError::stage).

mod config;
mod kernel;
mod moments;
mod paths;
mod pipeline;
mod shocks;
mod sweep;

pub use config::{
    SimulationConfig, SimulationConfigBuilder, DEFAULT_ALPHA, DEFAULT_BETA, DEFAULT_GAMMA,
    DEFAULT_HORIZON, DEFAULT_MU_C, DEFAULT_MU_E, DEFAULT_RHO_CE, DEFAULT_SEED, DEFAULT_SIGMA_C,
    DEFAULT_SIGMA_E, MAX_HORIZON,
};
pub use kernel::{derive_kernel, MarginalUtilitySeries, SdfSeries};
pub use moments::{estimate_moments, PricingResult, RiskyReturnSeries};
pub use paths::{build_paths, ClampReport, ConsumptionPath, SurplusPath, SURPLUS_FLOOR};
pub use pipeline::{simulate, simulate_detailed, simulate_with, PeriodRecord, SimulationOutput};
pub use shocks::{
    CholeskySampler, SamplerKind, ShockPair, ShockSampler, ShockSeries, SpectralSampler,
};
pub use sweep::{
    replicate, replicate_with, sweep_alpha, sweep_alpha_with, MomentSummary, ReplicationSummary,
};
