use crate::NoacAgent;
use crate::decision::{DoseDecision, DosingInput};

/// Apixaban: reduce when at least two of age ≥80, weight ≤60 kg, and
/// serum creatinine ≥1.5 mg/dL are present. The clearance value itself
/// is not part of the criteria.
pub struct Apixaban;

impl NoacAgent for Apixaban {
    fn id(&self) -> &str {
        "apixaban"
    }

    fn name(&self) -> &str {
        "Apixaban"
    }

    fn decide_with(&self, _clearance: f64, patient: &DosingInput) -> DoseDecision {
        let mut criteria = 0;
        if patient.age >= 80 {
            criteria += 1;
        }
        if patient.weight_kg <= 60.0 {
            criteria += 1;
        }
        if patient.serum_creatinine >= 1.5 {
            criteria += 1;
        }

        if criteria >= 2 {
            DoseDecision::reduced(
                "2.5 mg BID",
                "at least two of age ≥80, weight ≤60 kg, creatinine ≥1.5 are met",
            )
        } else {
            DoseDecision::standard("5 mg BID")
        }
    }
}
