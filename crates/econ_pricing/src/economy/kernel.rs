//! Marginal utility and the one-period stochastic discount factor.
//!
//! ```text
//! m[t] = surplus[t]^(-gamma)          t = 0..T
//! M[t] = beta * m[t+1] / m[t]         t = 0..T-1
//! ```

use econ_core::types::{SimulationError, Stage};
use tracing::debug;

use super::paths::SurplusPath;

/// Marginal utility `m[0..=T]` of surplus consumption.
#[derive(Clone, Debug, PartialEq)]
pub struct MarginalUtilitySeries {
    values: Vec<f64>,
}

impl MarginalUtilitySeries {
    /// Marginal utility values.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One-period stochastic discount factor `M[0..T]`.
#[derive(Clone, Debug, PartialEq)]
pub struct SdfSeries {
    values: Vec<f64>,
}

impl SdfSeries {
    /// SDF values; `values()[t]` prices payoffs of period `t + 1` at `t`.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Derives marginal utility and the SDF from a surplus path.
///
/// # Errors
///
/// - `InvalidParameters` at `KernelDerivation` if `beta` is outside (0, 1)
///   or `gamma` is not finite and positive
/// - `NonFiniteValue` if marginal utility overflows or underflows to zero,
///   or an SDF value is not finite
///
/// # Examples
///
/// ```rust
/// use econ_pricing::economy::{build_paths, derive_kernel};
///
/// let (_, surplus) = build_paths(&[0.0, 0.0], 0.0).unwrap();
/// let (mu, sdf) = derive_kernel(&surplus, 0.99, 2.0).unwrap();
///
/// assert_eq!(mu.len(), 3);
/// assert_eq!(sdf.values(), &[0.99, 0.99]);
/// ```
pub fn derive_kernel(
    surplus: &SurplusPath,
    beta: f64,
    gamma: f64,
) -> Result<(MarginalUtilitySeries, SdfSeries), SimulationError> {
    if !(beta > 0.0 && beta < 1.0) {
        return Err(SimulationError::invalid_at(
            Stage::KernelDerivation,
            "beta",
            format!("must lie in (0, 1), got {}", beta),
        ));
    }
    if !(gamma.is_finite() && gamma > 0.0) {
        return Err(SimulationError::invalid_at(
            Stage::KernelDerivation,
            "gamma",
            format!("must be finite and positive, got {}", gamma),
        ));
    }

    let mut marginal = Vec::with_capacity(surplus.len());
    for (t, &s) in surplus.values().iter().enumerate() {
        let m = s.powf(-gamma);
        // Zero would turn the next ratio into inf or NaN.
        if !m.is_finite() || m == 0.0 {
            return Err(SimulationError::NonFiniteValue {
                stage: Stage::KernelDerivation,
                series: "marginal_utility",
                index: t,
            });
        }
        marginal.push(m);
    }

    let mut sdf = Vec::with_capacity(marginal.len().saturating_sub(1));
    for (t, pair) in marginal.windows(2).enumerate() {
        let value = beta * pair[1] / pair[0];
        if !value.is_finite() {
            return Err(SimulationError::NonFiniteValue {
                stage: Stage::KernelDerivation,
                series: "sdf",
                index: t,
            });
        }
        sdf.push(value);
    }

    debug!(periods = sdf.len(), beta, gamma, "kernel derived");

    Ok((
        MarginalUtilitySeries { values: marginal },
        SdfSeries { values: sdf },
    ))
}
