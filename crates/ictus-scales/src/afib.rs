use serde::{Deserialize, Serialize};
use ts_rs::TS;

use ictus_core::models::sex::Sex;

/// CHA₂DS₂-VASc: stroke risk in non-valvular atrial fibrillation.
///
/// One point each for heart failure, hypertension, diabetes, vascular
/// disease, and female sex; two points for prior stroke/TIA/
/// thromboembolism; the age tier contributes 0/1/2 at thresholds 65
/// and 75. Total 0–9.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChadsVasc {
    pub heart_failure: bool,
    pub hypertension: bool,
    pub age: u32,
    pub diabetes: bool,
    pub prior_stroke_tia: bool,
    pub vascular_disease: bool,
    pub sex: Sex,
}

impl ChadsVasc {
    pub fn total(&self) -> u8 {
        let mut score = 0;
        if self.heart_failure {
            score += 1;
        }
        if self.hypertension {
            score += 1;
        }
        score += if self.age >= 75 {
            2
        } else if self.age >= 65 {
            1
        } else {
            0
        };
        if self.diabetes {
            score += 1;
        }
        if self.prior_stroke_tia {
            score += 2;
        }
        if self.vascular_disease {
            score += 1;
        }
        if self.sex.is_female() {
            score += 1;
        }
        score
    }
}

/// Annual stroke/systemic-embolism risk (%) by score, registry data.
/// Returns `None` above the maximum score of 9.
pub fn annual_risk_percent(score: u8) -> Option<f64> {
    match score {
        0 => Some(0.2),
        1 => Some(0.6),
        2 => Some(2.2),
        3 => Some(3.2),
        4 => Some(4.8),
        5 => Some(7.2),
        6 => Some(9.7),
        7 => Some(11.2),
        8 => Some(10.8),
        9 => Some(12.2),
        _ => None,
    }
}
