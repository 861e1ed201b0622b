use serde::{Deserialize, Serialize};
use ts_rs::TS;

use ictus_core::models::sex::Sex;

use crate::error::RiskError;

/// Race/ethnicity coefficient group of the 2013 ACC/AHA pooled cohort
/// equations. The published tables cover these two groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CoefficientGroup {
    White,
    AfricanAmerican,
}

/// Inputs to the pooled-cohort-equations estimator. Immutable per call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskProfile {
    pub sex: Sex,
    pub group: CoefficientGroup,
    pub age: f64,
    pub total_cholesterol: f64,
    pub hdl: f64,
    pub systolic_bp: f64,
    pub bp_treated: bool,
    pub smoker: bool,
    pub diabetes: bool,
}

struct Coefficients {
    ln_age: f64,
    ln_age_sq: f64,
    ln_tc: f64,
    ln_age_ln_tc: f64,
    ln_hdl: f64,
    ln_age_ln_hdl: f64,
    ln_sbp_treated: f64,
    ln_sbp_untreated: f64,
    smoker: f64,
    ln_age_smoker: f64,
    diabetes: f64,
    mean: f64,
    baseline_survival: f64,
}

static WHITE_MALE: Coefficients = Coefficients {
    ln_age: 12.344,
    ln_age_sq: 0.0,
    ln_tc: 11.853,
    ln_age_ln_tc: -2.664,
    ln_hdl: -7.990,
    ln_age_ln_hdl: 1.769,
    ln_sbp_treated: 1.797,
    ln_sbp_untreated: 1.764,
    smoker: 7.837,
    ln_age_smoker: -1.795,
    diabetes: 0.658,
    mean: 61.18,
    baseline_survival: 0.9144,
};

static WHITE_FEMALE: Coefficients = Coefficients {
    ln_age: -29.799,
    ln_age_sq: 4.884,
    ln_tc: 13.540,
    ln_age_ln_tc: -3.114,
    ln_hdl: -13.578,
    ln_age_ln_hdl: 3.149,
    ln_sbp_treated: 2.019,
    ln_sbp_untreated: 1.957,
    smoker: 7.574,
    ln_age_smoker: -1.665,
    diabetes: 0.661,
    mean: -29.18,
    baseline_survival: 0.9665,
};

static AFRICAN_AMERICAN_MALE: Coefficients = Coefficients {
    ln_age: 2.469,
    ln_age_sq: 0.0,
    ln_tc: 0.302,
    ln_age_ln_tc: 0.0,
    ln_hdl: -0.307,
    ln_age_ln_hdl: 0.0,
    ln_sbp_treated: 1.916,
    ln_sbp_untreated: 1.809,
    smoker: 0.549,
    ln_age_smoker: 0.0,
    diabetes: 0.645,
    mean: 19.54,
    baseline_survival: 0.8954,
};

static AFRICAN_AMERICAN_FEMALE: Coefficients = Coefficients {
    ln_age: 17.114,
    ln_age_sq: 0.0,
    ln_tc: 0.940,
    ln_age_ln_tc: 0.0,
    ln_hdl: -18.920,
    ln_age_ln_hdl: 4.475,
    ln_sbp_treated: 29.291,
    ln_sbp_untreated: 27.820,
    smoker: 0.691,
    ln_age_smoker: 0.0,
    diabetes: 0.874,
    mean: 86.61,
    baseline_survival: 0.9533,
};

fn coefficients(sex: Sex, group: CoefficientGroup) -> &'static Coefficients {
    match (sex, group) {
        (Sex::Male, CoefficientGroup::White) => &WHITE_MALE,
        (Sex::Female, CoefficientGroup::White) => &WHITE_FEMALE,
        (Sex::Male, CoefficientGroup::AfricanAmerican) => &AFRICAN_AMERICAN_MALE,
        (Sex::Female, CoefficientGroup::AfricanAmerican) => &AFRICAN_AMERICAN_FEMALE,
    }
}

/// Ten-year ASCVD risk (%) from the pooled cohort equations.
///
/// An educational estimate; it can differ from certified calculators.
/// Fails on non-positive age, cholesterol, HDL, or systolic BP, where
/// the logarithms below are undefined.
pub fn ten_year_risk_percent(profile: &RiskProfile) -> Result<f64, RiskError> {
    if profile.age <= 0.0 {
        return Err(RiskError::InvalidInput("age"));
    }
    if profile.total_cholesterol <= 0.0 {
        return Err(RiskError::InvalidInput("total cholesterol"));
    }
    if profile.hdl <= 0.0 {
        return Err(RiskError::InvalidInput("HDL"));
    }
    if profile.systolic_bp <= 0.0 {
        return Err(RiskError::InvalidInput("systolic BP"));
    }

    let c = coefficients(profile.sex, profile.group);
    let ln_age = profile.age.ln();
    let ln_tc = profile.total_cholesterol.ln();
    let ln_hdl = profile.hdl.ln();
    let ln_sbp = profile.systolic_bp.ln();
    let smoker = if profile.smoker { 1.0 } else { 0.0 };
    let diabetes = if profile.diabetes { 1.0 } else { 0.0 };

    let mut sum = c.ln_age * ln_age + c.ln_age_sq * ln_age * ln_age;
    sum += c.ln_tc * ln_tc + c.ln_age_ln_tc * ln_age * ln_tc;
    sum += c.ln_hdl * ln_hdl + c.ln_age_ln_hdl * ln_age * ln_hdl;
    sum += if profile.bp_treated {
        c.ln_sbp_treated * ln_sbp
    } else {
        c.ln_sbp_untreated * ln_sbp
    };
    sum += c.smoker * smoker + c.ln_age_smoker * ln_age * smoker;
    sum += c.diabetes * diabetes;

    let risk = 1.0 - c.baseline_survival.powf((sum - c.mean).exp());
    Ok(risk.clamp(0.0, 1.0) * 100.0)
}
