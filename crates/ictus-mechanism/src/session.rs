use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::MechanismError;
use crate::mechanism::{Mechanism, resolve};

/// The next question a session will ask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Question {
    OtherCauseEstablished,
    LacunarPattern,
    RelevantArteryLesion,
    BranchAtheroma,
    NonGenericPattern,
    CardioembolicSource,
    HighRiskCardioembolic,
}

/// Accumulated answers. Follow-up questions that were never asked stay
/// recorded as `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Answers {
    pub other_cause_established: bool,
    pub lacunar_pattern: bool,
    pub relevant_artery: bool,
    pub branch_atheroma: bool,
    pub non_generic_pattern: bool,
    pub cardioembolic_source: bool,
    pub high_risk_cardioembolic: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
enum Step {
    OtherCause,
    Lacunar,
    RelevantArtery,
    BranchAtheroma,
    NonGeneric,
    Cardioembolic,
    HighRisk,
    Complete,
}

/// One MAGIC questionnaire session. Each logical session owns its state
/// and serializes its own transitions through `&mut self`; independent
/// sessions share nothing.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MagicSession {
    step: Step,
    answers: Answers,
}

impl Default for MagicSession {
    fn default() -> Self {
        Self::new()
    }
}

impl MagicSession {
    pub fn new() -> Self {
        Self {
            step: Step::OtherCause,
            answers: Answers::default(),
        }
    }

    /// The question currently awaiting an answer, or `None` once the
    /// session is complete.
    pub fn current_question(&self) -> Option<Question> {
        match self.step {
            Step::OtherCause => Some(Question::OtherCauseEstablished),
            Step::Lacunar => Some(Question::LacunarPattern),
            Step::RelevantArtery => Some(Question::RelevantArteryLesion),
            Step::BranchAtheroma => Some(Question::BranchAtheroma),
            Step::NonGeneric => Some(Question::NonGenericPattern),
            Step::Cardioembolic => Some(Question::CardioembolicSource),
            Step::HighRisk => Some(Question::HighRiskCardioembolic),
            Step::Complete => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.step == Step::Complete
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// Record one answer to the current question and advance. A
    /// completed session rejects further answers until `reset`.
    pub fn answer(&mut self, yes: bool) -> Result<(), MechanismError> {
        let question = self
            .current_question()
            .ok_or(MechanismError::SessionComplete)?;
        debug!(question = ?question, answer = yes, "magic answer");

        self.step = match self.step {
            Step::OtherCause => {
                self.answers.other_cause_established = yes;
                if yes { Step::Complete } else { Step::Lacunar }
            }
            Step::Lacunar => {
                self.answers.lacunar_pattern = yes;
                Step::RelevantArtery
            }
            Step::RelevantArtery => {
                self.answers.relevant_artery = yes;
                if yes && self.answers.lacunar_pattern {
                    Step::BranchAtheroma
                } else if yes {
                    Step::NonGeneric
                } else {
                    Step::Cardioembolic
                }
            }
            Step::BranchAtheroma => {
                self.answers.branch_atheroma = yes;
                Step::Cardioembolic
            }
            Step::NonGeneric => {
                self.answers.non_generic_pattern = yes;
                Step::Cardioembolic
            }
            Step::Cardioembolic => {
                self.answers.cardioembolic_source = yes;
                if yes { Step::HighRisk } else { Step::Complete }
            }
            Step::HighRisk => {
                self.answers.high_risk_cardioembolic = yes;
                Step::Complete
            }
            Step::Complete => Step::Complete,
        };
        Ok(())
    }

    /// The resolved mechanism, available once the session is complete.
    pub fn mechanism(&self) -> Option<Mechanism> {
        if self.is_complete() {
            Some(resolve(&self.answers))
        } else {
            None
        }
    }

    /// Replace the session with a fresh zero-valued one.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
