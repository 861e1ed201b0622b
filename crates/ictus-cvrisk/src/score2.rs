use serde::{Deserialize, Serialize};
use ts_rs::TS;

use ictus_core::models::sex::Sex;

/// HeartScore country risk cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskRegion {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl RiskRegion {
    fn multiplier(self) -> f64 {
        match self {
            RiskRegion::Low => 0.9,
            RiskRegion::Moderate => 1.0,
            RiskRegion::High => 1.15,
            RiskRegion::VeryHigh => 1.3,
        }
    }
}

/// Inputs to the simplified SCORE2-style estimate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Score2Input {
    pub age: f64,
    pub sex: Sex,
    pub smoker: bool,
    pub systolic_bp: f64,
    pub non_hdl: f64,
    pub region: RiskRegion,
}

/// Simplified 10-year CVD risk estimate (%), SCORE2-style.
///
/// The published SCORE2 charts need per-country cluster coefficients;
/// this is a monotonic approximation of their shape, squashed through a
/// logistic centered at 25 and clamped to [0.1, 50.0]. Not a certified
/// computation.
pub fn estimate_percent(input: &Score2Input) -> f64 {
    let mut score = (input.age - 40.0) * 0.18;
    if input.smoker {
        score += 6.0;
    }
    score += (input.systolic_bp - 120.0) * 0.05;
    score += (input.non_hdl - 130.0) * 0.03;
    if !input.sex.is_female() {
        score *= 1.20;
    }
    score *= input.region.multiplier();

    let percent = 100.0 / (1.0 + (-0.07 * (score - 25.0)).exp());
    percent.clamp(0.1, 50.0)
}
