mod amortization;
mod config;
mod dscr;
mod fixflip;

pub use amortization::monthly_payment;
pub use config::UnderwritingConfig;
pub use dscr::{DscrAnalysis, DscrRequest, DscrStatus};
pub use fixflip::{FixFlipAnalysis, FixFlipRequest, FlipVerdict};

/// Stateless evaluator applying the platform's underwriting policy to
/// structured deal inputs. Every method is a deterministic pure function of
/// its request and the configured thresholds.
pub struct UnderwritingEngine {
    config: UnderwritingConfig,
}

impl UnderwritingEngine {
    pub fn new(config: UnderwritingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &UnderwritingConfig {
        &self.config
    }

    /// Debt service coverage analysis for a rental loan.
    pub fn coverage(&self, request: &DscrRequest) -> Result<DscrAnalysis, UnderwritingError> {
        dscr::evaluate(request, &self.config)
    }

    /// Profit and return analysis for a fix & flip deal.
    pub fn flip_returns(
        &self,
        request: &FixFlipRequest,
    ) -> Result<FixFlipAnalysis, UnderwritingError> {
        fixflip::evaluate(request, &self.config)
    }
}

/// Conditions under which the underwriting math is undefined. These are
/// rejected outright rather than reported as sentinel ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UnderwritingError {
    #[error("loan term must be at least one year")]
    InvalidTerm,
    #[error("monthly debt service is zero; coverage ratio is undefined")]
    ZeroDebtService,
    #[error("total basis is zero; return on investment is undefined")]
    ZeroBasis,
}

/// Round to the nearest whole dollar.
pub(crate) fn round_dollars(amount: f64) -> i64 {
    amount.round() as i64
}

/// Round a ratio to two decimal places.
pub(crate) fn round_ratio(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round a percentage to one decimal place.
pub(crate) fn round_percent(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
