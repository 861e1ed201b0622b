use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Side of the body an exam finding localizes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Laterality {
    Left,
    Right,
    Bilateral,
}

impl Laterality {
    /// Lower-case adjective for narrative text ("left hypesthesia").
    pub fn adjective(self) -> &'static str {
        match self {
            Laterality::Left => "left",
            Laterality::Right => "right",
            Laterality::Bilateral => "bilateral",
        }
    }
}
