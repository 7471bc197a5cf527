//! Discounted cash flow valuation (DCF-lite).
//!
//! A two-stage model: free cash flow grows at a constant rate for an explicit
//! horizon, then a Gordon growth terminal value captures everything after.
//!
//! ```text
//! FCF_t = FCF_0 * (1 + g)^t                            t = 1..=N
//! PV    = Σ FCF_t / (1 + r)^t
//! TV    = FCF_N * (1 + g_T) / (r - g_T)
//! EV    = PV + TV / (1 + r)^N
//! Equity = EV - net_debt
//! ```

use econ_core::types::ScoringError;

/// Assumptions of the DCF-lite model.
///
/// # Examples
///
/// ```
/// use econ_models::dcf::DcfAssumptions;
///
/// let dcf = DcfAssumptions::default();
/// assert_eq!(dcf.years, 5);
/// assert_eq!(dcf.discount, 0.10);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DcfAssumptions {
    /// Explicit forecast horizon in years.
    pub years: u32,
    /// Annual FCF growth during the explicit horizon.
    pub growth: f64,
    /// Annual discount rate.
    pub discount: f64,
    /// Perpetual growth after the horizon.
    pub terminal_growth: f64,
}

impl Default for DcfAssumptions {
    fn default() -> Self {
        Self {
            years: 5,
            growth: 0.10,
            discount: 0.10,
            terminal_growth: 0.025,
        }
    }
}

impl DcfAssumptions {
    /// Equity value for a trailing FCF and net debt under these assumptions.
    ///
    /// # Errors
    ///
    /// See [`dcf_lite_equity_value`].
    pub fn equity_value(&self, fcf0: f64, net_debt: f64) -> Result<f64, ScoringError> {
        dcf_lite_equity_value(
            fcf0,
            self.years,
            self.growth,
            self.discount,
            self.terminal_growth,
            net_debt,
        )
    }
}

/// Equity value (not per share) of a firm with trailing free cash flow `fcf0`.
///
/// # Errors
///
/// `ScoringError::InvalidParameters` if:
/// - any input is non-finite
/// - `discount <= terminal_growth` (the terminal value diverges)
/// - `discount <= -1`
///
/// # Examples
///
/// ```
/// use econ_models::dcf::dcf_lite_equity_value;
///
/// // Growth equal to the discount rate: every explicit year is worth FCF_0.
/// let value = dcf_lite_equity_value(100.0, 5, 0.10, 0.10, 0.025, 0.0).unwrap();
/// let terminal = 100.0 * 1.025 / 0.075;
/// assert!((value - (500.0 + terminal)).abs() < 1e-9);
///
/// assert!(dcf_lite_equity_value(100.0, 5, 0.10, 0.02, 0.025, 0.0).is_err());
/// ```
pub fn dcf_lite_equity_value(
    fcf0: f64,
    years: u32,
    growth: f64,
    discount: f64,
    terminal_growth: f64,
    net_debt: f64,
) -> Result<f64, ScoringError> {
    for (name, value) in [
        ("fcf0", fcf0),
        ("growth", growth),
        ("discount", discount),
        ("terminal_growth", terminal_growth),
        ("net_debt", net_debt),
    ] {
        if !value.is_finite() {
            return Err(ScoringError::InvalidParameters {
                name,
                reason: format!("must be finite, got {}", value),
            });
        }
    }
    if discount <= terminal_growth {
        return Err(ScoringError::InvalidParameters {
            name: "discount",
            reason: format!(
                "discount rate {} must exceed terminal growth {}",
                discount, terminal_growth
            ),
        });
    }
    if discount <= -1.0 {
        return Err(ScoringError::InvalidParameters {
            name: "discount",
            reason: format!("discount rate must exceed -100%, got {}", discount),
        });
    }

    let mut present_value = 0.0;
    let mut fcf = fcf0;
    let mut discount_factor = 1.0;
    for _ in 0..years {
        fcf *= 1.0 + growth;
        discount_factor *= 1.0 + discount;
        present_value += fcf / discount_factor;
    }

    let terminal_value = fcf * (1.0 + terminal_growth) / (discount - terminal_growth);
    let enterprise_value = present_value + terminal_value / discount_factor;

    Ok(enterprise_value - net_debt)
}
