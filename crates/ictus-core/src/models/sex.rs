use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Patient sex as used by the scoring, dosing, and risk formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn is_female(self) -> bool {
        matches!(self, Sex::Female)
    }
}
