//! Consumption and habit-adjusted surplus paths.
//!
//! # Recursions
//!
//! ```text
//! C[0] = 1
//! C[t+1] = C[t] * exp(gc[t])                        t = 0..T-1
//!
//! surplus[0] = C[0]
//! surplus[t] = max(C[t] - alpha * C[t-1], FLOOR)    t = 1..T
//! ```
//!
//! The habit at `t` is a fraction of the *previous* level, so both paths are
//! built by a single forward pass carrying the previous consumption level.
//! With `alpha = 0` the general formula yields `surplus == C` exactly.

use econ_core::types::{SimulationError, Stage};
use serde::Serialize;
use tracing::{debug, warn};

/// Lower bound applied to surplus consumption.
///
/// Keeps marginal utility `surplus^(-gamma)` finite when the habit reaches or
/// exceeds current consumption.
pub const SURPLUS_FLOOR: f64 = 1e-6;

/// Consumption levels `C[0..=T]`.
#[derive(Clone, Debug, PartialEq)]
pub struct ConsumptionPath {
    levels: Vec<f64>,
}

impl ConsumptionPath {
    /// Compounds growth shocks from the initial level `C[0] = 1`.
    ///
    /// # Errors
    ///
    /// `SimulationError::NonFiniteValue` at `PathBuilding` if a level
    /// overflows.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use econ_pricing::economy::ConsumptionPath;
    ///
    /// let path = ConsumptionPath::from_growth(&[0.0, 0.1]).unwrap();
    /// assert_eq!(path.levels()[0], 1.0);
    /// assert_eq!(path.len(), 3);
    /// assert!((path.levels()[2] - 0.1_f64.exp()).abs() < 1e-15);
    /// ```
    pub fn from_growth(growth: &[f64]) -> Result<Self, SimulationError> {
        let mut levels = Vec::with_capacity(growth.len() + 1);
        let mut level = 1.0_f64;
        levels.push(level);

        for (t, &g) in growth.iter().enumerate() {
            level *= g.exp();
            if !level.is_finite() {
                return Err(SimulationError::NonFiniteValue {
                    stage: Stage::PathBuilding,
                    series: "consumption",
                    index: t + 1,
                });
            }
            levels.push(level);
        }

        Ok(Self { levels })
    }

    /// Consumption levels.
    #[inline]
    pub fn levels(&self) -> &[f64] {
        &self.levels
    }

    /// Number of levels (`T + 1`).
    #[inline]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false: the initial level is always present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// Record of every surplus-floor engagement in one run.
///
/// # Examples
///
/// ```rust
/// use econ_pricing::economy::{ConsumptionPath, SurplusPath};
///
/// // Consumption falls by 50% in period 1; with alpha = 0.9 the habit
/// // (0.9) exceeds consumption (0.5).
/// let consumption = ConsumptionPath::from_growth(&[0.5_f64.ln()]).unwrap();
/// let surplus = SurplusPath::from_consumption(&consumption, 0.9).unwrap();
///
/// assert!(surplus.clamp_report().is_clamped());
/// assert_eq!(surplus.clamp_report().indices(), &[1]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClampReport {
    floor: f64,
    indices: Vec<usize>,
}

impl ClampReport {
    fn new(floor: f64) -> Self {
        Self {
            floor,
            indices: Vec::new(),
        }
    }

    /// Floor value that was applied.
    #[inline]
    pub fn floor(&self) -> f64 {
        self.floor
    }

    /// Indices of the surplus path where the floor replaced the raw value.
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of clamped periods.
    #[inline]
    pub fn count(&self) -> usize {
        self.indices.len()
    }

    /// Whether the floor engaged at least once.
    #[inline]
    pub fn is_clamped(&self) -> bool {
        !self.indices.is_empty()
    }
}

/// Habit-adjusted surplus consumption `surplus[0..=T]`.
#[derive(Clone, Debug, PartialEq)]
pub struct SurplusPath {
    values: Vec<f64>,
    clamps: ClampReport,
}

impl SurplusPath {
    /// Derives the surplus path from consumption levels and habit intensity.
    ///
    /// # Errors
    ///
    /// `SimulationError::InvalidParameters` at `PathBuilding` if `alpha` is
    /// outside [0, 1).
    pub fn from_consumption(
        consumption: &ConsumptionPath,
        alpha: f64,
    ) -> Result<Self, SimulationError> {
        if !(0.0..1.0).contains(&alpha) {
            return Err(SimulationError::invalid_at(
                Stage::PathBuilding,
                "alpha",
                format!("must lie in [0, 1), got {}", alpha),
            ));
        }

        let levels = consumption.levels();
        let mut values = Vec::with_capacity(levels.len());
        let mut clamps = ClampReport::new(SURPLUS_FLOOR);

        let Some(&first) = levels.first() else {
            return Ok(Self { values, clamps });
        };
        values.push(first);

        let mut previous = first;
        for (t, &level) in levels.iter().enumerate().skip(1) {
            let raw = level - alpha * previous;
            if raw < SURPLUS_FLOOR {
                clamps.indices.push(t);
                values.push(SURPLUS_FLOOR);
            } else {
                values.push(raw);
            }
            previous = level;
        }

        Ok(Self { values, clamps })
    }

    /// Surplus values.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of values (`T + 1`).
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the path holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Floor engagements recorded while building the path.
    #[inline]
    pub fn clamp_report(&self) -> &ClampReport {
        &self.clamps
    }
}

/// Builds the consumption and surplus paths from consumption-growth shocks.
///
/// Floor engagements are logged once per run at `warn` level.
///
/// # Errors
///
/// Propagates the errors of [`ConsumptionPath::from_growth`] and
/// [`SurplusPath::from_consumption`].
pub fn build_paths(
    growth: &[f64],
    alpha: f64,
) -> Result<(ConsumptionPath, SurplusPath), SimulationError> {
    let consumption = ConsumptionPath::from_growth(growth)?;
    let surplus = SurplusPath::from_consumption(&consumption, alpha)?;

    let clamps = surplus.clamp_report();
    if clamps.is_clamped() {
        warn!(
            alpha,
            clamped = clamps.count(),
            first_index = clamps.indices()[0],
            floor = clamps.floor(),
            "surplus floor engaged"
        );
    }
    debug!(periods = growth.len(), alpha, "paths built");

    Ok((consumption, surplus))
}
