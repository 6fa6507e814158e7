use serde::{Deserialize, Serialize};

/// Policy thresholds applied by the underwriting engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnderwritingConfig {
    /// Minimum coverage ratio for a passing DSCR deal.
    pub dscr_pass_threshold: f64,
    /// ROI (percent) above which a flip is rated strong.
    pub strong_roi_pct: f64,
    /// ROI (percent) below which a flip is rated weak.
    pub weak_roi_pct: f64,
    /// Holding period assumed when a flip request omits one.
    pub default_holding_months: u32,
}

impl Default for UnderwritingConfig {
    fn default() -> Self {
        Self {
            dscr_pass_threshold: 1.10,
            strong_roi_pct: 20.0,
            weak_roi_pct: 10.0,
            default_holding_months: 6,
        }
    }
}
