use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Patient covariates shared by the agent rules. The clearance estimate
/// is passed separately because it can be unavailable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DosingInput {
    pub age: u32,
    pub weight_kg: f64,
    pub serum_creatinine: f64,
}

/// The kind of call an agent made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DoseCall {
    Standard,
    Reduced,
    /// Not recommended without specialist review.
    NeedsReview,
    /// A label restriction may apply; check before prescribing.
    CheckLabel,
    /// Recommended dose differs between country labels.
    LabelDependent,
    /// No clearance estimate, so no rule can run.
    CannotCompute,
}

/// A dose decision: the call, the dose text where one exists, and the
/// rationale behind the call.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DoseDecision {
    pub call: DoseCall,
    pub dose: Option<String>,
    pub rationale: String,
}

impl DoseDecision {
    pub fn standard(dose: &str) -> Self {
        Self {
            call: DoseCall::Standard,
            dose: Some(dose.to_string()),
            rationale: "standard dose".to_string(),
        }
    }

    pub fn reduced(dose: &str, rationale: &str) -> Self {
        Self {
            call: DoseCall::Reduced,
            dose: Some(dose.to_string()),
            rationale: rationale.to_string(),
        }
    }

    pub fn needs_review(rationale: &str) -> Self {
        Self {
            call: DoseCall::NeedsReview,
            dose: None,
            rationale: rationale.to_string(),
        }
    }

    pub fn check_label(rationale: &str) -> Self {
        Self {
            call: DoseCall::CheckLabel,
            dose: None,
            rationale: rationale.to_string(),
        }
    }

    pub fn label_dependent(rationale: &str) -> Self {
        Self {
            call: DoseCall::LabelDependent,
            dose: None,
            rationale: rationale.to_string(),
        }
    }

    pub fn cannot_compute() -> Self {
        Self {
            call: DoseCall::CannotCompute,
            dose: None,
            rationale: "a creatinine clearance estimate is required".to_string(),
        }
    }
}
