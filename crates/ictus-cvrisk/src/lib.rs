//! ictus-cvrisk
//!
//! Ten-year cardiovascular risk estimation and lipid targets: the
//! pooled-cohort-equations model, a simplified SCORE2-style regional
//! estimate, ESC risk-category cutoffs, LDL-C targets, and the staged
//! lipid-therapy escalation policy. The two estimators are independent
//! and never reconciled — callers get both and decide.

pub mod ascvd;
pub mod category;
pub mod error;
pub mod pce;
pub mod score2;
