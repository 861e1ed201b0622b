use crate::NoacAgent;
use crate::decision::{DoseDecision, DosingInput};

/// Edoxaban: clearance- and weight-tiered, with a high-clearance
/// caution — some AF labels restrict use above 95 mL/min.
pub struct Edoxaban;

impl NoacAgent for Edoxaban {
    fn id(&self) -> &str {
        "edoxaban"
    }

    fn name(&self) -> &str {
        "Edoxaban"
    }

    fn decide_with(&self, clearance: f64, patient: &DosingInput) -> DoseDecision {
        if clearance < 15.0 {
            return DoseDecision::needs_review(
                "clearance below 15 mL/min; not recommended without specialist review",
            );
        }
        if clearance <= 50.0 || patient.weight_kg <= 60.0 {
            return DoseDecision::reduced(
                "30 mg QD",
                "clearance in the 15–50 mL/min band or weight ≤60 kg",
            );
        }
        if clearance > 95.0 {
            return DoseDecision::check_label(
                "clearance above 95 mL/min; the AF label may restrict use",
            );
        }
        DoseDecision::standard("60 mg QD")
    }
}
