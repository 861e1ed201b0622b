use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::session::Answers;

/// Stroke-mechanism label produced at the terminal step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Mechanism {
    OtherDetermined,
    /// Large-artery atherosclerosis, branch-atheroma type.
    LargeArteryBranch,
    /// Large-artery atherosclerosis with a lacunar infarct pattern.
    LargeArteryLacunar,
    SmallVesselOcclusion,
    /// Large-artery atherosclerosis, non-generic (atypical) pattern.
    LargeArteryAtypical,
    LargeArtery,
    HighRiskCardioembolic,
    /// Undetermined despite a negative work-up.
    UndeterminedNegative,
}

impl Mechanism {
    pub fn label(self) -> &'static str {
        match self {
            Mechanism::OtherDetermined => "Other determined",
            Mechanism::LargeArteryBranch => "large-artery, branch-type",
            Mechanism::LargeArteryLacunar => "large-artery, lacunar-pattern",
            Mechanism::SmallVesselOcclusion => "small-vessel occlusion",
            Mechanism::LargeArteryAtypical => "large-artery, atypical pattern",
            Mechanism::LargeArtery => "large-artery",
            Mechanism::HighRiskCardioembolic => "high-risk cardioembolic",
            Mechanism::UndeterminedNegative => "undetermined, negative work-up",
        }
    }
}

/// Resolve the mechanism from a full answer set. First matching rule
/// wins; the order below is fixed.
pub fn resolve(answers: &Answers) -> Mechanism {
    if answers.other_cause_established {
        return Mechanism::OtherDetermined;
    }

    if answers.lacunar_pattern {
        if answers.relevant_artery {
            if answers.branch_atheroma {
                return Mechanism::LargeArteryBranch;
            }
            return Mechanism::LargeArteryLacunar;
        }
        if answers.cardioembolic_source {
            return cardioembolic(answers);
        }
        return Mechanism::SmallVesselOcclusion;
    }

    if answers.relevant_artery {
        if answers.non_generic_pattern {
            return Mechanism::LargeArteryAtypical;
        }
        return Mechanism::LargeArtery;
    }
    if answers.cardioembolic_source {
        return cardioembolic(answers);
    }
    Mechanism::UndeterminedNegative
}

fn cardioembolic(answers: &Answers) -> Mechanism {
    if answers.high_risk_cardioembolic {
        Mechanism::HighRiskCardioembolic
    } else {
        Mechanism::UndeterminedNegative
    }
}
