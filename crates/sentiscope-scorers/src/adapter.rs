//! Lifts a synchronous scorer into the async `IScorer` contract.

use async_trait::async_trait;
use sentiscope_core::errors::ScorerResult;
use sentiscope_core::models::ScoringResult;
use sentiscope_core::traits::{IScorer, ISyncScorer};

/// Wraps an `ISyncScorer` so it can be registered next to async scorers.
///
/// The wrapped scorer runs inline on the polling task and never fails.
#[derive(Debug, Clone, Default)]
pub struct SyncScorer<S> {
    inner: S,
}

impl<S: ISyncScorer> SyncScorer<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait]
impl<S: ISyncScorer> IScorer for SyncScorer<S> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn score(&self, text: &str) -> ScorerResult<ScoringResult> {
        Ok(self.inner.score_text(text))
    }
}
