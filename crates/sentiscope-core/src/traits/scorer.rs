use async_trait::async_trait;

use crate::errors::ScorerResult;
use crate::models::ScoringResult;

/// A sentiment scoring method.
///
/// Synchronous scorers implement this through a thin adapter so the
/// orchestrator can drive every scorer the same way.
#[async_trait]
pub trait IScorer: Send + Sync {
    /// Human-readable scorer name, used as the result source label.
    fn name(&self) -> &str;

    /// Score a single text.
    async fn score(&self, text: &str) -> ScorerResult<ScoringResult>;
}

/// A scorer that is a pure, synchronous function of its input.
pub trait ISyncScorer: Send + Sync {
    fn name(&self) -> &str;

    fn score_text(&self, text: &str) -> ScoringResult;
}
