use ictus_core::models::sex::Sex;

use crate::error::DosingError;

/// Cockcroft–Gault creatinine clearance estimate in mL/min:
/// `((140 − age) × weight) / (72 × SCr)`, ×0.85 for female patients.
pub fn creatinine_clearance(
    age: u32,
    weight_kg: f64,
    serum_creatinine: f64,
    sex: Sex,
) -> Result<f64, DosingError> {
    if serum_creatinine <= 0.0 {
        return Err(DosingError::InvalidCreatinine(serum_creatinine));
    }
    let mut clearance = ((140.0 - age as f64) * weight_kg) / (72.0 * serum_creatinine);
    if sex.is_female() {
        clearance *= 0.85;
    }
    Ok(clearance)
}
