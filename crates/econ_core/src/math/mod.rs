//! Numeric building blocks.
//!
//! - [`stats`]: sample statistics over slices
//! - [`covariance`]: validated 2×2 covariance matrices and their factors
//! - [`smoothing`]: recursive one-dimensional price smoothing

pub mod covariance;
pub mod smoothing;
pub mod stats;
