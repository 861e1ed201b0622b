use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::TimingError;
use crate::lesion::{Lesion, PosteriorSite};

/// Infarct severity label. The derived order (Minor < Moderate < Major)
/// is what the aggregation's max/tie-break logic relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Minor,
    Moderate,
    Major,
}

const MAX_LESIONS: usize = 4;

/// Classify a single lesion.
pub fn classify(lesion: &Lesion) -> Severity {
    match *lesion {
        Lesion::Posterior { site, exceeds_15_mm } => {
            match site {
                PosteriorSite::Brainstem | PosteriorSite::Cerebellum if exceeds_15_mm => {
                    Severity::Major
                }
                PosteriorSite::PcaCorticalBranch => Severity::Moderate,
                // Remaining sites classify by size alone.
                _ => {
                    if exceeds_15_mm {
                        Severity::Moderate
                    } else {
                        Severity::Minor
                    }
                }
            }
        }
        Lesion::Anterior {
            pattern,
            extent,
            multi_territory,
            exceeds_15_mm,
        } => {
            if extent.is_some() || multi_territory {
                return Severity::Major;
            }
            if pattern.is_some() {
                return Severity::Moderate;
            }
            // No named pattern: size alone decides.
            if exceeds_15_mm {
                Severity::Moderate
            } else {
                Severity::Minor
            }
        }
    }
}

/// Aggregate 1–4 per-lesion labels into the overall severity.
///
/// Starting from the maximum label, two escalation stages apply in
/// order: a cluster of two or more minor lesions behaves like one
/// moderate lesion (each further minor adds another moderate
/// equivalent), and two or more moderate equivalents escalate the
/// result to major.
pub fn overall_severity(labels: &[Severity]) -> Result<Severity, TimingError> {
    if labels.is_empty() {
        return Err(TimingError::NoLesions);
    }
    if labels.len() > MAX_LESIONS {
        return Err(TimingError::TooManyLesions {
            max: MAX_LESIONS,
            got: labels.len(),
        });
    }

    let minor = labels.iter().filter(|&&s| s == Severity::Minor).count();
    let moderate = labels.iter().filter(|&&s| s == Severity::Moderate).count();
    let base = labels.iter().copied().max().unwrap_or(Severity::Minor);

    let mut result = base;
    if result == Severity::Minor && minor >= 2 {
        result = Severity::Moderate;
    }
    let moderate_equivalents = moderate + minor.saturating_sub(1);
    if result <= Severity::Moderate && moderate_equivalents >= 2 {
        result = Severity::Major;
    }
    Ok(result)
}

/// Classify each lesion and aggregate in one step.
pub fn classify_all(lesions: &[Lesion]) -> Result<Severity, TimingError> {
    let labels: Vec<Severity> = lesions.iter().map(classify).collect();
    overall_severity(&labels)
}

/// Recommended window for early DOAC initiation after the infarct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StartWindow {
    Within48Hours,
    Day6To7,
}

impl StartWindow {
    pub fn label(self) -> &'static str {
        match self {
            StartWindow::Within48Hours => "≤ 48 hours",
            StartWindow::Day6To7 => "6–7 days",
        }
    }
}

/// Fixed two-way map from overall severity to the start window.
pub fn start_window(severity: Severity) -> StartWindow {
    match severity {
        Severity::Minor | Severity::Moderate => StartWindow::Within48Hours,
        Severity::Major => StartWindow::Day6To7,
    }
}
