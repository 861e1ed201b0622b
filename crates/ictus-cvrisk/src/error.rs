use thiserror::Error;

#[derive(Debug, Error)]
pub enum RiskError {
    #[error("{0} must be positive")]
    InvalidInput(&'static str),
}
