use thiserror::Error;

#[derive(Debug, Error)]
pub enum MechanismError {
    #[error("session is complete; reset before answering again")]
    SessionComplete,
}
