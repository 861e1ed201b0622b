use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// ESC risk category, ordered by cutoff. `VeryHighRecurrent` marks a
/// recurrent ASCVD event within two years on maximal therapy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskCategory {
    Low,
    Moderate,
    High,
    VeryHigh,
    VeryHighRecurrent,
}

impl RiskCategory {
    /// Cutoffs on the estimated 10-year risk percentage, inclusive
    /// lower bounds evaluated highest-first: ≥20 very high, ≥10 high,
    /// ≥2 moderate, else low.
    pub fn from_percent(percent: f64) -> RiskCategory {
        if percent >= 20.0 {
            RiskCategory::VeryHigh
        } else if percent >= 10.0 {
            RiskCategory::High
        } else if percent >= 2.0 {
            RiskCategory::Moderate
        } else {
            RiskCategory::Low
        }
    }

    /// LDL-C target (mg/dL, exclusive upper bound) for this category.
    pub fn ldl_target_mg_dl(self) -> u32 {
        match self {
            RiskCategory::VeryHighRecurrent => 40,
            RiskCategory::VeryHigh => 55,
            RiskCategory::High => 70,
            RiskCategory::Moderate => 100,
            RiskCategory::Low => 116,
        }
    }
}
