//! Weighted equity scoring rubric.
//!
//! Five categories are scored on a 0–10 scale from linear ramps over
//! financial-statement ratios, then combined with fixed weights:
//!
//! | category           | weight | factors |
//! |--------------------|--------|---------|
//! | quality            | 0.25   | ROIC, gross margin, operating margin |
//! | financial strength | 0.20   | current ratio, net debt/EBITDA, interest coverage, FCF sign |
//! | growth             | 0.20   | revenue, EPS and FCF five-year CAGR |
//! | valuation          | 0.25   | DCF-lite upside (neutral fallback without inputs) |
//! | management         | 0.10   | fixed score |
//!
//! A neutral valuation fallback is flagged on the [`CategoryScore`] so that
//! callers can tell a computed 5 from a default one.

mod inputs;
mod rubric;

pub use inputs::StockInputs;
pub use rubric::{
    CategoryScore, DecisionBand, ScoreCard, ScoringRubric, ScoringWeights,
    DEFAULT_MANAGEMENT_SCORE, MAX_CATEGORY_SCORE, NEUTRAL_VALUATION_SCORE,
};

use econ_core::types::ScoringError;

/// Scores one stock with the default rubric.
///
/// # Errors
///
/// See [`ScoringRubric::score`].
///
/// # Examples
///
/// ```
/// use econ_models::scoring::{total_weighted_score, DecisionBand, StockInputs};
///
/// let card = total_weighted_score(&StockInputs {
///     roic: Some(0.25),
///     gross_margin: Some(0.70),
///     op_margin: Some(0.35),
///     ..StockInputs::default()
/// })
/// .unwrap();
///
/// assert_eq!(card.quality.score, 10.0);
/// assert_eq!(card.decision_band, DecisionBand::Avoid);
/// ```
pub fn total_weighted_score(inputs: &StockInputs) -> Result<ScoreCard, ScoringError> {
    ScoringRubric::default().score(inputs)
}
