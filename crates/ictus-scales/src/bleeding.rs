use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// HAS-BLED: bleeding risk on anticoagulation. Nine independent
/// one-point factors, total 0–9.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HasBled {
    pub hypertension_sbp_over_160: bool,
    pub abnormal_renal_function: bool,
    pub abnormal_liver_function: bool,
    pub prior_stroke: bool,
    pub bleeding_history: bool,
    pub labile_inr: bool,
    pub age_over_65: bool,
    pub bleeding_predisposing_drugs: bool,
    pub excess_alcohol: bool,
}

impl HasBled {
    pub fn total(&self) -> u8 {
        [
            self.hypertension_sbp_over_160,
            self.abnormal_renal_function,
            self.abnormal_liver_function,
            self.prior_stroke,
            self.bleeding_history,
            self.labile_inr,
            self.age_over_65,
            self.bleeding_predisposing_drugs,
            self.excess_alcohol,
        ]
        .iter()
        .filter(|&&factor| factor)
        .count() as u8
    }
}
