use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimingError {
    #[error("at least one lesion is required")]
    NoLesions,

    #[error("at most {max} lesions are supported, got {got}")]
    TooManyLesions { max: usize, got: usize },
}
