//! ictus-dosing
//!
//! Renal-function-adjusted NOAC dosing. The Cockcroft–Gault clearance
//! estimate feeds four per-agent dose rules behind one `NoacAgent`
//! trait, so the "no clearance estimate ⇒ cannot compute" contract is
//! enforced in a single place.

pub mod agents;
pub mod decision;
pub mod error;
pub mod renal;

use tracing::debug;

use decision::{DoseDecision, DosingInput};

/// Trait implemented by each NOAC dose-decision agent.
pub trait NoacAgent: Send + Sync {
    /// Unique identifier for this agent (e.g., "apixaban").
    fn id(&self) -> &str;

    /// Human-readable drug name (e.g., "Apixaban").
    fn name(&self) -> &str;

    /// Dose decision for a clearance estimate and patient covariates.
    ///
    /// A missing clearance estimate is terminal: every agent reports
    /// `CannotCompute` rather than falling through to a standard dose.
    fn decide(&self, clearance: Option<f64>, patient: &DosingInput) -> DoseDecision {
        let decision = match clearance {
            Some(crcl) => self.decide_with(crcl, patient),
            None => DoseDecision::cannot_compute(),
        };
        debug!(agent = self.id(), call = ?decision.call, "dose decision");
        decision
    }

    /// Agent-specific rule, invoked only when a clearance estimate exists.
    fn decide_with(&self, clearance: f64, patient: &DosingInput) -> DoseDecision;
}

/// Return all registered dose-decision agents.
pub fn all_agents() -> Vec<Box<dyn NoacAgent>> {
    vec![
        Box::new(agents::apixaban::Apixaban),
        Box::new(agents::rivaroxaban::Rivaroxaban),
        Box::new(agents::edoxaban::Edoxaban),
        Box::new(agents::dabigatran::Dabigatran),
    ]
}

/// Look up an agent by ID.
pub fn get_agent(id: &str) -> Option<Box<dyn NoacAgent>> {
    all_agents().into_iter().find(|a| a.id() == id)
}
