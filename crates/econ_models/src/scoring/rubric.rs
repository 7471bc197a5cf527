//! Category scores, weights and the decision band.

use std::collections::BTreeMap;
use std::fmt;

use econ_core::types::ScoringError;

use super::inputs::StockInputs;
use crate::dcf::DcfAssumptions;

/// Upper bound of every category score.
pub const MAX_CATEGORY_SCORE: f64 = 10.0;

/// Valuation score used when the DCF inputs are incomplete.
pub const NEUTRAL_VALUATION_SCORE: f64 = 5.0;

/// Default management score (not derivable from statements).
pub const DEFAULT_MANAGEMENT_SCORE: f64 = 7.5;

/// Upside at or below which the valuation score is zero.
const UPSIDE_FLOOR: f64 = -0.20;

/// `points * clamp((x - zero_at) / (full_at - zero_at), 0, 1)`.
///
/// `full_at < zero_at` gives a decreasing ramp.
fn ramp(x: f64, zero_at: f64, full_at: f64, points: f64) -> f64 {
    points * ((x - zero_at) / (full_at - zero_at)).clamp(0.0, 1.0)
}

/// Score of one category with its per-factor breakdown.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CategoryScore {
    /// Score in [0, 10].
    pub score: f64,
    /// Points (or intermediate values) per factor.
    pub parts: BTreeMap<&'static str, f64>,
    /// Whether the score is a neutral default rather than computed.
    pub fallback: bool,
    /// Explanation attached to a fallback.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub note: Option<String>,
}

impl CategoryScore {
    fn from_points(parts: BTreeMap<&'static str, f64>) -> Self {
        let total: f64 = parts.values().sum();
        Self {
            score: total.clamp(0.0, MAX_CATEGORY_SCORE),
            parts,
            fallback: false,
            note: None,
        }
    }
}

/// Category weights of the total score.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScoringWeights {
    /// Business quality.
    pub quality: f64,
    /// Financial strength.
    pub financial_strength: f64,
    /// Growth.
    pub growth: f64,
    /// Valuation.
    pub valuation: f64,
    /// Management.
    pub management: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            quality: 0.25,
            financial_strength: 0.20,
            growth: 0.20,
            valuation: 0.25,
            management: 0.10,
        }
    }
}

/// Recommendation derived from the total score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DecisionBand {
    /// Total of 8 or more.
    #[cfg_attr(feature = "serde", serde(rename = "Strong Buy (by this rubric)"))]
    StrongBuy,
    /// Total in [6.5, 8).
    #[cfg_attr(feature = "serde", serde(rename = "Buy/Watch"))]
    BuyWatch,
    /// Total in [5, 6.5).
    Hold,
    /// Total below 5.
    Avoid,
}

impl DecisionBand {
    /// Band of a total weighted score.
    ///
    /// # Examples
    ///
    /// ```
    /// use econ_models::scoring::DecisionBand;
    ///
    /// assert_eq!(DecisionBand::from_score(8.0), DecisionBand::StrongBuy);
    /// assert_eq!(DecisionBand::from_score(6.49), DecisionBand::Hold);
    /// ```
    pub fn from_score(total: f64) -> Self {
        if total >= 8.0 {
            DecisionBand::StrongBuy
        } else if total >= 6.5 {
            DecisionBand::BuyWatch
        } else if total >= 5.0 {
            DecisionBand::Hold
        } else {
            DecisionBand::Avoid
        }
    }
}

impl fmt::Display for DecisionBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DecisionBand::StrongBuy => "Strong Buy (by this rubric)",
            DecisionBand::BuyWatch => "Buy/Watch",
            DecisionBand::Hold => "Hold",
            DecisionBand::Avoid => "Avoid",
        };
        f.write_str(label)
    }
}

/// Full scoring result for one stock.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScoreCard {
    /// Business quality.
    pub quality: CategoryScore,
    /// Financial strength.
    pub financial_strength: CategoryScore,
    /// Growth.
    pub growth: CategoryScore,
    /// Valuation.
    pub valuation: CategoryScore,
    /// Management score.
    pub management: f64,
    /// Weighted total in [0, 10].
    pub total_weighted_score: f64,
    /// Recommendation band of the total.
    pub decision_band: DecisionBand,
}

/// Weighted scoring rubric.
///
/// # Examples
///
/// ```
/// use econ_models::scoring::{ScoringRubric, StockInputs};
///
/// let card = ScoringRubric::default().score(&StockInputs::default()).unwrap();
///
/// // Only the neutral valuation and the management score contribute.
/// assert!(card.valuation.fallback);
/// assert!((card.total_weighted_score - 2.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScoringRubric {
    /// Category weights.
    pub weights: ScoringWeights,
    /// Management score in [0, 10].
    pub management_score: f64,
    /// Upside at or above which the valuation score is 10.
    pub upside_threshold: f64,
    /// DCF assumptions behind the intrinsic value.
    pub dcf: DcfAssumptions,
}

impl Default for ScoringRubric {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            management_score: DEFAULT_MANAGEMENT_SCORE,
            upside_threshold: 0.30,
            dcf: DcfAssumptions::default(),
        }
    }
}

impl ScoringRubric {
    /// Scores one stock.
    ///
    /// # Errors
    ///
    /// `ScoringError::InvalidParameters` if:
    /// - a present numeric input is non-finite
    /// - the price is non-positive or shares outstanding are negative
    /// - the upside threshold is not above -20%
    /// - the DCF assumptions are invalid
    pub fn score(&self, inputs: &StockInputs) -> Result<ScoreCard, ScoringError> {
        for (name, value) in inputs.present_values() {
            if !value.is_finite() {
                return Err(ScoringError::InvalidParameters {
                    name,
                    reason: format!("must be finite, got {}", value),
                });
            }
        }
        if self.upside_threshold.is_nan() || self.upside_threshold <= UPSIDE_FLOOR {
            return Err(ScoringError::InvalidParameters {
                name: "upside_threshold",
                reason: format!("must exceed {}, got {}", UPSIDE_FLOOR, self.upside_threshold),
            });
        }

        let quality = score_quality(inputs);
        let financial_strength = score_financial_strength(inputs);
        let growth = score_growth(inputs);
        let valuation = self.score_valuation(inputs)?;
        let management = self.management_score.clamp(0.0, MAX_CATEGORY_SCORE);

        let w = &self.weights;
        let total = w.quality * quality.score
            + w.financial_strength * financial_strength.score
            + w.growth * growth.score
            + w.valuation * valuation.score
            + w.management * management;

        Ok(ScoreCard {
            quality,
            financial_strength,
            growth,
            valuation,
            management,
            total_weighted_score: total,
            decision_band: DecisionBand::from_score(total),
        })
    }

    /// Valuation from DCF upside, or a neutral fallback without DCF inputs.
    fn score_valuation(&self, inputs: &StockInputs) -> Result<CategoryScore, ScoringError> {
        let dcf_inputs = match (inputs.price, inputs.shares_outstanding, inputs.fcf_ttm) {
            (Some(price), Some(shares), Some(fcf)) if shares != 0.0 && fcf != 0.0 => {
                Some((price, shares, fcf))
            }
            _ => None,
        };

        let Some((price, shares, fcf)) = dcf_inputs else {
            return Ok(CategoryScore {
                score: NEUTRAL_VALUATION_SCORE,
                parts: BTreeMap::new(),
                fallback: true,
                note: Some(format!(
                    "No DCF inputs provided; valuation score defaults to {}.",
                    NEUTRAL_VALUATION_SCORE
                )),
            });
        };

        if price <= 0.0 {
            return Err(ScoringError::InvalidParameters {
                name: "price",
                reason: format!("must be positive, got {}", price),
            });
        }
        if shares < 0.0 {
            return Err(ScoringError::InvalidParameters {
                name: "shares_outstanding",
                reason: format!("must be positive, got {}", shares),
            });
        }

        let equity_value = self
            .dcf
            .equity_value(fcf, inputs.net_debt.unwrap_or(0.0))?;
        let intrinsic_per_share = equity_value / shares;
        let upside = (intrinsic_per_share - price) / price;

        let points = if upside <= UPSIDE_FLOOR {
            0.0
        } else if upside >= self.upside_threshold {
            MAX_CATEGORY_SCORE
        } else {
            ramp(upside, UPSIDE_FLOOR, self.upside_threshold, MAX_CATEGORY_SCORE)
        };

        let mut parts = BTreeMap::new();
        parts.insert("intrinsic_per_share", intrinsic_per_share);
        parts.insert("upside_pct", upside);
        parts.insert("dcf_pts", points);

        Ok(CategoryScore {
            score: points.clamp(0.0, MAX_CATEGORY_SCORE),
            parts,
            fallback: false,
            note: None,
        })
    }
}

fn score_quality(inputs: &StockInputs) -> CategoryScore {
    let mut parts = BTreeMap::new();
    if let Some(roic) = inputs.roic {
        parts.insert("roic", ramp(roic, 0.08, 0.20, 4.0));
    }
    if let Some(gm) = inputs.gross_margin {
        parts.insert("gross_margin", ramp(gm, 0.25, 0.60, 3.0));
    }
    if let Some(om) = inputs.op_margin {
        parts.insert("op_margin", ramp(om, 0.05, 0.30, 3.0));
    }
    CategoryScore::from_points(parts)
}

fn score_financial_strength(inputs: &StockInputs) -> CategoryScore {
    let mut parts = BTreeMap::new();
    if let Some(ratio) = inputs.current_ratio {
        parts.insert("current_ratio", ramp(ratio, 1.0, 2.0, 2.0));
    }
    if let Some(leverage) = inputs.net_debt_to_ebitda {
        parts.insert("net_debt_to_ebitda", ramp(leverage, 2.5, 0.5, 3.0));
    }
    if let Some(coverage) = inputs.interest_coverage {
        parts.insert("interest_coverage", ramp(coverage, 2.0, 10.0, 3.0));
    }
    if let Some(positive) = inputs.fcf_positive {
        parts.insert("fcf_positive", if positive { 2.0 } else { 0.0 });
    }
    CategoryScore::from_points(parts)
}

fn score_growth(inputs: &StockInputs) -> CategoryScore {
    let mut parts = BTreeMap::new();
    if let Some(rev) = inputs.rev_cagr_5y {
        parts.insert("rev_cagr_5y", ramp(rev, 0.0, 0.15, 4.0));
    }
    if let Some(eps) = inputs.eps_cagr_5y {
        parts.insert("eps_cagr_5y", ramp(eps, 0.0, 0.18, 3.0));
    }
    if let Some(fcf) = inputs.fcf_cagr_5y {
        parts.insert("fcf_cagr_5y", ramp(fcf, 0.0, 0.18, 3.0));
    }
    CategoryScore::from_points(parts)
}
