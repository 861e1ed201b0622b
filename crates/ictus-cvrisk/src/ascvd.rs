use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::category::RiskCategory;

/// AHA/ACC very-high-risk determination for secondary prevention:
/// two or more major ASCVD events, or one event plus two or more
/// high-risk conditions.
pub fn very_high_risk(major_events: u32, high_risk_conditions: u32) -> bool {
    major_events >= 2 || (major_events == 1 && high_risk_conditions >= 2)
}

/// ESC category assignment when documented ASCVD takes precedence over
/// the estimated-risk cutoffs.
pub fn secondary_category(
    documented_ascvd: bool,
    recurrent_within_2_years: bool,
    score2_percent: f64,
) -> RiskCategory {
    if documented_ascvd && recurrent_within_2_years {
        RiskCategory::VeryHighRecurrent
    } else if documented_ascvd {
        RiskCategory::VeryHigh
    } else {
        RiskCategory::from_percent(score2_percent)
    }
}

/// AHA/ACC LDL-C threshold (mg/dL) above which therapy intensification
/// is considered in clinical ASCVD.
pub fn intensification_threshold_mg_dl(very_high: bool) -> u32 {
    if very_high { 55 } else { 70 }
}

/// Current lipid-lowering therapy.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TherapyStatus {
    pub high_intensity_statin: bool,
    pub ezetimibe: bool,
    pub pcsk9_inhibitor: bool,
}

/// One step of the staged escalation ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EscalationStep {
    /// Move to a high-intensity or maximally tolerated statin.
    OptimizeStatin,
    AddEzetimibe,
    AddPcsk9Inhibitor,
    /// All three agent classes in use; reassess adherence and
    /// secondary causes.
    ReassessAdherence,
    MaintainCurrent,
}

/// Escalation plan for a current LDL-C against the intensification
/// threshold: statin optimization first, then one add-on step per
/// review while above threshold.
pub fn escalation_plan(
    ldl_mg_dl: u32,
    threshold_mg_dl: u32,
    therapy: &TherapyStatus,
) -> Vec<EscalationStep> {
    let mut plan = Vec::new();
    if !therapy.high_intensity_statin {
        plan.push(EscalationStep::OptimizeStatin);
    }
    if ldl_mg_dl >= threshold_mg_dl {
        if !therapy.ezetimibe {
            plan.push(EscalationStep::AddEzetimibe);
        } else if !therapy.pcsk9_inhibitor {
            plan.push(EscalationStep::AddPcsk9Inhibitor);
        } else {
            plan.push(EscalationStep::ReassessAdherence);
        }
    } else {
        plan.push(EscalationStep::MaintainCurrent);
    }
    plan
}
