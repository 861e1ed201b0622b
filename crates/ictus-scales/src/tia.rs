use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// ABCD²: short-term stroke risk after a transient ischemic attack.
///
/// The focal-deficit points are mutually exclusive: unilateral weakness
/// scores 2 and wins over isolated speech disturbance (1). Duration
/// scores 2 at ≥60 minutes and 1 in the 10–59 minute band. Total 0–7.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Abcd2 {
    pub age_60_or_over: bool,
    pub bp_140_90_or_over: bool,
    pub unilateral_weakness: bool,
    pub speech_disturbance_without_weakness: bool,
    pub duration_minutes: u32,
    pub diabetes: bool,
}

impl Abcd2 {
    pub fn total(&self) -> u8 {
        let mut score = 0;
        if self.age_60_or_over {
            score += 1;
        }
        if self.bp_140_90_or_over {
            score += 1;
        }
        if self.unilateral_weakness {
            score += 2;
        } else if self.speech_disturbance_without_weakness {
            score += 1;
        }
        if self.duration_minutes >= 60 {
            score += 2;
        } else if self.duration_minutes >= 10 {
            score += 1;
        }
        if self.diabetes {
            score += 1;
        }
        score
    }

    pub fn risk_band(&self) -> RiskBand {
        RiskBand::from_total(self.total())
    }
}

/// ABCD² risk band: 0–3 Low, 4–5 Moderate, 6–7 High.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskBand {
    Low,
    Moderate,
    High,
}

/// Registry recurrence risk (%) at 2, 7, and 90 days for a risk band.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecurrenceRisk {
    pub two_day: f64,
    pub seven_day: f64,
    pub ninety_day: f64,
}

impl RiskBand {
    pub fn from_total(total: u8) -> RiskBand {
        if total <= 3 {
            RiskBand::Low
        } else if total <= 5 {
            RiskBand::Moderate
        } else {
            RiskBand::High
        }
    }

    pub fn recurrence_risk(self) -> RecurrenceRisk {
        match self {
            RiskBand::Low => RecurrenceRisk {
                two_day: 1.0,
                seven_day: 1.2,
                ninety_day: 3.1,
            },
            RiskBand::Moderate => RecurrenceRisk {
                two_day: 4.1,
                seven_day: 5.9,
                ninety_day: 9.8,
            },
            RiskBand::High => RecurrenceRisk {
                two_day: 8.1,
                seven_day: 11.7,
                ninety_day: 17.8,
            },
        }
    }
}
