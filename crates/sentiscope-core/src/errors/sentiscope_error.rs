use super::{ConfigError, ScorerError};

/// Top-level error for the Sentiscope workspace.
#[derive(Debug, thiserror::Error)]
pub enum SentiscopeError {
    #[error("scorer error: {0}")]
    ScorerError(#[from] ScorerError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type SentiscopeResult<T> = Result<T, SentiscopeError>;
