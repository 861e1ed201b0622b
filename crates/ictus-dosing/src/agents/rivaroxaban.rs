use crate::NoacAgent;
use crate::decision::{DoseDecision, DosingInput};

/// Rivaroxaban: clearance-tiered. Standard above 50 mL/min, reduced in
/// the 15–50 band, specialist review below 15.
pub struct Rivaroxaban;

impl NoacAgent for Rivaroxaban {
    fn id(&self) -> &str {
        "rivaroxaban"
    }

    fn name(&self) -> &str {
        "Rivaroxaban"
    }

    fn decide_with(&self, clearance: f64, _patient: &DosingInput) -> DoseDecision {
        if clearance > 50.0 {
            DoseDecision::standard("20 mg QD (with food)")
        } else if clearance >= 15.0 {
            DoseDecision::reduced("15 mg QD (with food)", "clearance in the 15–50 mL/min band")
        } else {
            DoseDecision::needs_review("clearance below 15 mL/min; not recommended without specialist review")
        }
    }
}
