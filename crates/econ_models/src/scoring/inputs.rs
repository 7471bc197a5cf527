//! Financial-statement inputs of the scoring rubric.

/// Per-stock inputs; every field is optional.
///
/// Ratios and growth rates are decimals (`0.14` for 14%). Missing fields
/// simply contribute no points to their category.
///
/// # Examples
///
/// ```
/// use econ_models::scoring::StockInputs;
///
/// let inputs = StockInputs {
///     roic: Some(0.15),
///     fcf_positive: Some(true),
///     ..StockInputs::default()
/// };
/// assert!(inputs.price.is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StockInputs {
    /// Return on invested capital.
    pub roic: Option<f64>,
    /// Gross margin.
    pub gross_margin: Option<f64>,
    /// Operating margin.
    pub op_margin: Option<f64>,

    /// Current assets over current liabilities.
    pub current_ratio: Option<f64>,
    /// Net debt over EBITDA.
    pub net_debt_to_ebitda: Option<f64>,
    /// EBIT over interest expense.
    pub interest_coverage: Option<f64>,
    /// Whether trailing free cash flow is positive.
    pub fcf_positive: Option<bool>,

    /// Five-year revenue CAGR.
    pub rev_cagr_5y: Option<f64>,
    /// Five-year EPS CAGR.
    pub eps_cagr_5y: Option<f64>,
    /// Five-year FCF CAGR.
    pub fcf_cagr_5y: Option<f64>,

    /// Share price.
    pub price: Option<f64>,
    /// Shares outstanding, in the same unit basis as `fcf_ttm` and `net_debt`.
    pub shares_outstanding: Option<f64>,
    /// Trailing-twelve-month free cash flow (total).
    pub fcf_ttm: Option<f64>,
    /// Debt minus cash; negative for a net cash position.
    pub net_debt: Option<f64>,

    /// Price over earnings. Carried for reference, not scored.
    pub pe: Option<f64>,
    /// Price over free cash flow. Carried for reference, not scored.
    pub p_fcf: Option<f64>,
    /// Enterprise value over EBITDA. Carried for reference, not scored.
    pub ev_ebitda: Option<f64>,
}

impl StockInputs {
    /// Name and value of every numeric field that is present.
    pub(crate) fn present_values(&self) -> impl Iterator<Item = (&'static str, f64)> {
        [
            ("roic", self.roic),
            ("gross_margin", self.gross_margin),
            ("op_margin", self.op_margin),
            ("current_ratio", self.current_ratio),
            ("net_debt_to_ebitda", self.net_debt_to_ebitda),
            ("interest_coverage", self.interest_coverage),
            ("rev_cagr_5y", self.rev_cagr_5y),
            ("eps_cagr_5y", self.eps_cagr_5y),
            ("fcf_cagr_5y", self.fcf_cagr_5y),
            ("price", self.price),
            ("shares_outstanding", self.shares_outstanding),
            ("fcf_ttm", self.fcf_ttm),
            ("net_debt", self.net_debt),
            ("pe", self.pe),
            ("p_fcf", self.p_fcf),
            ("ev_ebitda", self.ev_ebitda),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
    }
}
