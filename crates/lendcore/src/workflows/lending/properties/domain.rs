use serde::{Deserialize, Serialize};

/// Identifier wrapper for listed properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyId(pub u64);

/// Loan program a property is marketed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvestmentType {
    #[serde(rename = "DSCR")]
    Dscr,
    #[serde(rename = "Fix & Flip")]
    FixFlip,
}

impl InvestmentType {
    pub const fn label(self) -> &'static str {
        match self {
            InvestmentType::Dscr => "DSCR",
            InvestmentType::FixFlip => "Fix & Flip",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        match value {
            "DSCR" => Some(InvestmentType::Dscr),
            "Fix & Flip" => Some(InvestmentType::FixFlip),
            _ => None,
        }
    }
}

/// Scope of renovation a flip listing calls for. Turnkey listings carry none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RehabLevel {
    Heavy,
    Cosmetic,
}

impl RehabLevel {
    pub const fn label(self) -> &'static str {
        match self {
            RehabLevel::Heavy => "Heavy",
            RehabLevel::Cosmetic => "Cosmetic",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        match value {
            "Heavy" => Some(RehabLevel::Heavy),
            "Cosmetic" => Some(RehabLevel::Cosmetic),
            _ => None,
        }
    }
}

/// A marketed listing as supplied by the property data provider.
///
/// Monthly amounts (`est_rent`, `taxes`, `insurance`) are whole dollars.
/// DSCR listings carry `est_rent`; flip listings carry `est_arv` and a rehab
/// budget. The calculators never mutate a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub address: String,
    /// Two-letter USPS state code.
    pub state: String,
    pub investment_type: InvestmentType,
    pub purchase_price: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub est_rent: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub est_arv: Option<u32>,
    pub taxes: u32,
    pub insurance: u32,
    pub rehab: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rehab_type: Option<RehabLevel>,
}
