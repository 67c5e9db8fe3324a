use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResetError {
    #[error("docker compose is not installed or not available in PATH")]
    ComposeUnavailable,

    #[error("step failed: {0}")]
    StepFailed(String),
}

pub type Result<T> = std::result::Result<T, ResetError>;
