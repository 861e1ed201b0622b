use crate::NoacAgent;
use crate::decision::{DoseDecision, DosingInput};

/// Dabigatran: clearance- and age-tiered. The 15–30 mL/min band has no
/// single recommendation across country labels.
pub struct Dabigatran;

impl NoacAgent for Dabigatran {
    fn id(&self) -> &str {
        "dabigatran"
    }

    fn name(&self) -> &str {
        "Dabigatran"
    }

    fn decide_with(&self, clearance: f64, patient: &DosingInput) -> DoseDecision {
        if clearance < 15.0 {
            return DoseDecision::needs_review(
                "clearance below 15 mL/min; not recommended without specialist review",
            );
        }
        if clearance <= 30.0 {
            return DoseDecision::label_dependent(
                "clearance in the 15–30 mL/min band; recommended dose varies by country label",
            );
        }
        if patient.age >= 80 {
            return DoseDecision::check_label(
                "age ≥80; consider the reduced-dose option and check the label",
            );
        }
        DoseDecision::standard("150 mg BID")
    }
}
