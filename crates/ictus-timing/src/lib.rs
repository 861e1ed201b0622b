//! ictus-timing
//!
//! ELAN-style infarct classification: per-lesion severity from the
//! lesion's circulation, site/pattern, and size, aggregation over 1–4
//! lesions, and the early-DOAC start-window recommendation.

pub mod error;
pub mod lesion;
pub mod severity;
