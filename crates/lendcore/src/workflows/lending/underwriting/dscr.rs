use serde::{Deserialize, Serialize};

use super::amortization::monthly_payment;
use super::config::UnderwritingConfig;
use super::{round_dollars, round_ratio, UnderwritingError};

/// Inputs for a rental coverage analysis. Taxes and insurance are monthly
/// amounts and default to zero when the caller omits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DscrRequest {
    pub loan_amount: f64,
    /// Annual interest rate as a percentage.
    pub interest_rate: f64,
    pub term_years: u32,
    /// Gross monthly rent.
    pub rent: f64,
    #[serde(default)]
    pub taxes: f64,
    #[serde(default)]
    pub insurance: f64,
}

/// Pass/fail verdict against the coverage threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DscrStatus {
    Pass,
    Fail,
}

impl DscrStatus {
    pub const fn label(self) -> &'static str {
        match self {
            DscrStatus::Pass => "pass",
            DscrStatus::Fail => "fail",
        }
    }
}

/// Coverage analysis result. Dollar figures are rounded to whole dollars and
/// the ratio to two decimals; the status is decided on the rounded ratio so
/// the record never contradicts itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DscrAnalysis {
    pub p_and_i: i64,
    pub monthly_debt: i64,
    pub dscr: f64,
    pub status: DscrStatus,
}

pub(crate) fn evaluate(
    request: &DscrRequest,
    config: &UnderwritingConfig,
) -> Result<DscrAnalysis, UnderwritingError> {
    let p_and_i = monthly_payment(request.loan_amount, request.interest_rate, request.term_years)?;
    let monthly_debt = p_and_i + request.taxes + request.insurance;

    if monthly_debt == 0.0 {
        return Err(UnderwritingError::ZeroDebtService);
    }

    let dscr = round_ratio(request.rent / monthly_debt);
    let status = if dscr >= config.dscr_pass_threshold {
        DscrStatus::Pass
    } else {
        DscrStatus::Fail
    };

    Ok(DscrAnalysis {
        p_and_i: round_dollars(p_and_i),
        monthly_debt: round_dollars(monthly_debt),
        dscr,
        status,
    })
}
