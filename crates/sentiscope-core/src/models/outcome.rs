use crate::errors::{ScorerError, SentiscopeResult};

use super::ScoringResult;

/// Result of one scorer's attempt on one request.
#[derive(Debug, Clone, PartialEq)]
pub enum ScorerOutcome {
    Success(ScoringResult),
    Failure { source: String, error: ScorerError },
}

impl ScorerOutcome {
    /// Name of the scorer this outcome belongs to.
    pub fn source(&self) -> &str {
        match self {
            Self::Success(result) => &result.source,
            Self::Failure { source, .. } => source,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn as_success(&self) -> Option<&ScoringResult> {
        match self {
            Self::Success(result) => Some(result),
            Self::Failure { .. } => None,
        }
    }

    /// Convert back into a `Result`, surfacing the scorer error.
    pub fn into_result(self) -> SentiscopeResult<ScoringResult> {
        match self {
            Self::Success(result) => Ok(result),
            Self::Failure { error, .. } => Err(error.into()),
        }
    }
}
