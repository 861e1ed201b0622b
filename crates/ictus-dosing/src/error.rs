use thiserror::Error;

#[derive(Debug, Error)]
pub enum DosingError {
    #[error("serum creatinine must be positive, got {0}")]
    InvalidCreatinine(f64),
}
