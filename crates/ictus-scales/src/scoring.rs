use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Inclusive integer range for a single scale item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemRange {
    pub min: u8,
    pub max: u8,
}

impl ItemRange {
    pub fn contains(&self, value: u8) -> bool {
        value >= self.min && value <= self.max
    }
}

/// One out-of-range item found during validation.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ItemViolation {
    pub item_id: String,
    pub value: u8,
    pub expected_range: ItemRange,
    pub message: String,
}
