use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Site of a posterior-circulation lesion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PosteriorSite {
    Brainstem,
    Cerebellum,
    /// PCA cortical superficial branch.
    PcaCorticalBranch,
    /// Any other posterior-circulation site; classified by size alone.
    Other,
}

/// Anterior-circulation patterns that classify as moderate on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AnteriorPattern {
    McaCorticalBranch,
    McaDeepBranch,
    InternalBorderzone,
    AcaCorticalBranch,
}

/// Anterior-circulation extents that classify as major on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AnteriorExtent {
    EntireTerritory,
    /// Two or more cortical superficial branches involved.
    MultipleCorticalBranches,
    /// Cortical superficial plus deep branch involvement.
    CorticalAndDeepBranches,
}

/// One anatomical infarct lesion, keyed by circulation territory.
/// Constructed per lesion entry (1–4 per case) and consumed once by the
/// classifier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Lesion {
    Anterior {
        pattern: Option<AnteriorPattern>,
        extent: Option<AnteriorExtent>,
        /// Two or more arterial territories involved at once.
        multi_territory: bool,
        /// Largest dimension exceeds 1.5 cm.
        exceeds_15_mm: bool,
    },
    Posterior {
        site: PosteriorSite,
        exceeds_15_mm: bool,
    },
}
