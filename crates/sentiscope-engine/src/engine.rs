//! SentimentEngine, the main entry point for sentiscope-engine.
//!
//! Owns the registered scorer set and turns one text into one
//! `AnalysisReport`: fan out, collect outcomes, aggregate.

use std::sync::Arc;

use chrono::Utc;
use sentiscope_core::config::SentiscopeConfig;
use sentiscope_core::errors::SentiscopeResult;
use sentiscope_core::models::{AnalysisReport, AnalysisStatus, FailureRecord, ScorerOutcome};
use sentiscope_core::traits::{IScorer, ISentimentModelLoader};
use sentiscope_scorers::create_scorers;
use tracing::{info, Instrument};
use uuid::Uuid;

use crate::aggregator::Aggregator;
use crate::analysis_span;
use crate::orchestrator::AnalysisOrchestrator;

/// The main analysis engine.
///
/// Holds no per-request state: every `analyze` call builds its outcomes,
/// aggregate and report from scratch.
pub struct SentimentEngine {
    scorers: Vec<Arc<dyn IScorer>>,
    orchestrator: AnalysisOrchestrator,
    aggregator: Aggregator,
}

impl Default for SentimentEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentEngine {
    /// Create an engine with no scorers registered.
    pub fn new() -> Self {
        Self {
            scorers: Vec::new(),
            orchestrator: AnalysisOrchestrator::new(),
            aggregator: Aggregator::new(),
        }
    }

    /// Create an engine with the built-in scorers enabled in `config`.
    ///
    /// The transformer scorer is registered only when `loader` is given.
    pub fn from_config(
        config: &SentiscopeConfig,
        loader: Option<Arc<dyn ISentimentModelLoader>>,
    ) -> SentiscopeResult<Self> {
        config.validate()?;
        let mut engine = Self::new();
        engine.scorers = create_scorers(&config.scorers, loader);
        Ok(engine)
    }

    /// Register an additional scorer after the existing ones.
    pub fn with_scorer(mut self, scorer: Arc<dyn IScorer>) -> Self {
        self.scorers.push(scorer);
        self
    }

    /// Registered scorer names, in registration order.
    pub fn scorer_names(&self) -> Vec<&str> {
        self.scorers.iter().map(|s| s.name()).collect()
    }

    /// Analyze one text with every registered scorer.
    ///
    /// Scorer failures never surface as errors: they are reported in
    /// `failures` and reflected in `status`. Any text is accepted, including
    /// the empty string.
    pub async fn analyze(&self, text: &str) -> AnalysisReport {
        let request_id = Uuid::new_v4();
        let outcomes = self
            .orchestrator
            .run_all(text, &self.scorers)
            .instrument(analysis_span!(request_id, self.scorers.len()))
            .await;

        let aggregate = self.aggregator.aggregate(&outcomes);

        let mut per_source = Vec::new();
        let mut failures = Vec::new();
        for outcome in outcomes {
            match outcome {
                ScorerOutcome::Success(result) => per_source.push(result),
                ScorerOutcome::Failure { source, error } => failures.push(FailureRecord {
                    source,
                    error: error.to_string(),
                }),
            }
        }
        let status = AnalysisStatus::from_counts(per_source.len(), failures.len());

        info!(
            request_id = %request_id,
            status = ?status,
            succeeded = per_source.len(),
            failed = failures.len(),
            "analysis complete"
        );

        AnalysisReport {
            request_id,
            analyzed_at: Utc::now(),
            aggregate,
            per_source,
            failures,
            status,
        }
    }
}
