use thiserror::Error;

/// Errors raised outside of the simulation core.
#[derive(Debug, Error)]
pub enum LifeError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// The background generation task panicked or was cancelled.
    #[error("generation task failed: {0}")]
    Task(String),
}

pub type Result<T> = std::result::Result<T, LifeError>;
