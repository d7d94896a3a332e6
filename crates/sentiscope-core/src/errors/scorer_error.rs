/// Errors raised by an individual scorer.
///
/// These never escape an analysis run: the orchestrator turns each one into
/// a failed outcome for the scorer that raised it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScorerError {
    #[error("scorer {scorer} failed to initialize: {reason}")]
    Initialization { scorer: String, reason: String },

    #[error("scorer {scorer} failed: {reason}")]
    Execution { scorer: String, reason: String },
}

impl ScorerError {
    /// Name of the scorer that raised the error.
    pub fn scorer(&self) -> &str {
        match self {
            Self::Initialization { scorer, .. } | Self::Execution { scorer, .. } => scorer,
        }
    }

    pub fn is_initialization(&self) -> bool {
        matches!(self, Self::Initialization { .. })
    }
}

pub type ScorerResult<T> = Result<T, ScorerError>;
