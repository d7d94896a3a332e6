//! Fan-out/fan-in over the registered scorers.
//!
//! Every scorer is started against the same text before any is awaited, and
//! the run settles only when all of them have finished. A failing scorer
//! becomes a `Failure` outcome; it never stops its siblings.

use std::sync::Arc;

use futures::future::join_all;
use sentiscope_core::models::ScorerOutcome;
use sentiscope_core::traits::IScorer;
use tracing::{warn, Instrument};

use crate::scorer_span;

/// Runs scorers concurrently and collects one outcome per scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisOrchestrator;

impl AnalysisOrchestrator {
    pub fn new() -> Self {
        Self
    }

    /// Score `text` with every scorer.
    ///
    /// Outcomes are returned in `scorers` order regardless of completion
    /// order. No timeout, retry or cancellation is applied.
    pub async fn run_all(&self, text: &str, scorers: &[Arc<dyn IScorer>]) -> Vec<ScorerOutcome> {
        let pending = scorers.iter().map(|scorer| {
            let name = scorer.name().to_string();
            async move {
                match scorer.score(text).await {
                    Ok(mut result) => {
                        result.source = name;
                        ScorerOutcome::Success(result)
                    }
                    Err(error) => {
                        warn!(scorer = %name, error = %error, "scorer failed");
                        ScorerOutcome::Failure {
                            source: name,
                            error,
                        }
                    }
                }
            }
            .instrument(scorer_span!(scorer.name()))
        });

        join_all(pending).await
    }
}
