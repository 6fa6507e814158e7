use serde::{Deserialize, Serialize};

use crate::workflows::lending::properties::{InvestmentType, PropertyId};

/// Estimated closing costs as a share of the loan amount.
pub const CLOSING_COST_RATE: f64 = 0.03;

fn default_down_payment_percent() -> f64 {
    20.0
}

/// Quote request for a marketed listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub property_id: PropertyId,
    pub investment_type: InvestmentType,
    #[serde(default = "default_down_payment_percent")]
    pub down_payment_percent: f64,
}

impl QuoteRequest {
    pub fn new(property_id: PropertyId, investment_type: InvestmentType) -> Self {
        Self {
            property_id,
            investment_type,
            down_payment_percent: default_down_payment_percent(),
        }
    }
}

/// Fixed rate sheet. Rates and terms are business constants set by the
/// capital desk, not derived from the deal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanProduct {
    pub product_type: &'static str,
    /// Annual interest rate as a percentage.
    pub interest_rate: f64,
    pub term_years: u32,
}

impl LoanProduct {
    pub const fn for_investment(investment_type: InvestmentType) -> Self {
        match investment_type {
            InvestmentType::Dscr => Self {
                product_type: "DSCR Rental",
                interest_rate: 7.25,
                term_years: 30,
            },
            InvestmentType::FixFlip => Self {
                product_type: "Fix & Flip",
                interest_rate: 10.50,
                term_years: 1,
            },
        }
    }
}

/// Generated on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub property_id: PropertyId,
    pub loan_amount: i64,
    pub interest_rate: f64,
    pub term_years: u32,
    pub product_type: String,
    pub est_closing_costs: i64,
}
