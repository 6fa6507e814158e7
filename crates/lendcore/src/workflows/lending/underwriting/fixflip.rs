use serde::{Deserialize, Serialize};

use super::config::UnderwritingConfig;
use super::{round_dollars, round_percent, UnderwritingError};

/// Inputs for a fix & flip return analysis. A zero or omitted holding period
/// falls back to the configured default; monthly carrying costs default to
/// zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixFlipRequest {
    pub purchase_price: f64,
    pub rehab_budget: f64,
    /// Estimated after-repair value.
    pub arv: f64,
    #[serde(default)]
    pub holding_months: u32,
    #[serde(default)]
    pub monthly_costs: f64,
}

/// Deal rating tiers, ordered by attractiveness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlipVerdict {
    Strong,
    Marginal,
    Weak,
}

impl FlipVerdict {
    pub const fn label(self) -> &'static str {
        match self {
            FlipVerdict::Strong => "strong",
            FlipVerdict::Marginal => "marginal",
            FlipVerdict::Weak => "weak",
        }
    }
}

/// Return analysis result. Dollar figures are whole dollars; ROI is a
/// percentage rounded to one decimal, and the verdict is decided on that
/// rounded figure. Profit may be negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixFlipAnalysis {
    pub total_basis: i64,
    pub total_holding: i64,
    pub profit: i64,
    pub roi: f64,
    pub verdict: FlipVerdict,
}

pub(crate) fn evaluate(
    request: &FixFlipRequest,
    config: &UnderwritingConfig,
) -> Result<FixFlipAnalysis, UnderwritingError> {
    let holding_months = if request.holding_months == 0 {
        config.default_holding_months
    } else {
        request.holding_months
    };

    let total_basis = request.purchase_price + request.rehab_budget;
    if total_basis == 0.0 {
        return Err(UnderwritingError::ZeroBasis);
    }

    let total_holding = request.monthly_costs * f64::from(holding_months);
    let profit = request.arv - total_basis - total_holding;
    let roi = round_percent(profit / total_basis * 100.0);
    let verdict = classify_roi(roi, config);

    Ok(FixFlipAnalysis {
        total_basis: round_dollars(total_basis),
        total_holding: round_dollars(total_holding),
        profit: round_dollars(profit),
        roi,
        verdict,
    })
}

/// Ordered first-match classification: strong above the upper threshold,
/// weak below the lower one, marginal for everything between (inclusive).
fn classify_roi(roi: f64, config: &UnderwritingConfig) -> FlipVerdict {
    if roi > config.strong_roi_pct {
        FlipVerdict::Strong
    } else if roi < config.weak_roi_pct {
        FlipVerdict::Weak
    } else {
        FlipVerdict::Marginal
    }
}
