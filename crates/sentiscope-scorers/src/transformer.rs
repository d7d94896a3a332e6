//! Transformer-backed scorer.
//!
//! The model itself is opaque: an `ISentimentModelLoader` produces an
//! `ISentimentClassifier` whose binary prediction is mapped onto the
//! three-way distribution. The model is loaded on first use. Concurrent
//! first callers share one load; a failed load leaves the scorer unloaded
//! so a later request tries again.

use std::sync::Arc;

use async_trait::async_trait;
use sentiscope_core::constants::{MODEL_NEUTRAL_SCORE, MODEL_POSITIVE_LABEL, TRANSFORMER_SOURCE};
use sentiscope_core::errors::{ScorerError, ScorerResult, SentiscopeResult};
use sentiscope_core::models::{
    ModelPrediction, ScoringResult, SentimentDistribution, SentimentLabel,
};
use sentiscope_core::traits::{IScorer, ISentimentClassifier, ISentimentModelLoader};
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

/// Scorer backed by a lazily loaded classification model.
pub struct TransformerScorer {
    loader: Arc<dyn ISentimentModelLoader>,
    model_id: String,
    classifier: OnceCell<Arc<dyn ISentimentClassifier>>,
}

impl TransformerScorer {
    pub fn new(loader: Arc<dyn ISentimentModelLoader>, model_id: impl Into<String>) -> Self {
        Self {
            loader,
            model_id: model_id.into(),
            classifier: OnceCell::new(),
        }
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Whether the model has been loaded successfully.
    pub fn is_loaded(&self) -> bool {
        self.classifier.initialized()
    }

    /// Load the model ahead of the first analysis.
    pub async fn warm_up(&self) -> SentiscopeResult<()> {
        self.classifier().await?;
        Ok(())
    }

    async fn classifier(&self) -> ScorerResult<&Arc<dyn ISentimentClassifier>> {
        self.classifier
            .get_or_try_init(|| async {
                info!(model = %self.model_id, "loading sentiment model");
                match self.loader.load(&self.model_id).await {
                    Ok(classifier) => {
                        info!(model = %self.model_id, "sentiment model loaded");
                        Ok(classifier)
                    }
                    Err(e) => {
                        warn!(model = %self.model_id, error = %e, "sentiment model failed to load");
                        Err(ScorerError::Initialization {
                            scorer: TRANSFORMER_SOURCE.to_string(),
                            reason: reason_of(e),
                        })
                    }
                }
            })
            .await
    }

    /// Map a binary prediction onto the three-way distribution.
    fn to_result(prediction: &ModelPrediction) -> ScorerResult<ScoringResult> {
        let score = prediction.score;
        if !score.is_finite() || !(0.0..=1.0).contains(&score) {
            return Err(ScorerError::Execution {
                scorer: TRANSFORMER_SOURCE.to_string(),
                reason: format!("model score out of range: {score}"),
            });
        }

        let (sentiment, scores) = if prediction.label == MODEL_POSITIVE_LABEL {
            (
                SentimentLabel::Positive,
                SentimentDistribution::new(score, MODEL_NEUTRAL_SCORE, 1.0 - score),
            )
        } else {
            (
                SentimentLabel::Negative,
                SentimentDistribution::new(1.0 - score, MODEL_NEUTRAL_SCORE, score),
            )
        };

        Ok(ScoringResult::new(
            TRANSFORMER_SOURCE,
            sentiment,
            score,
            scores,
        ))
    }
}

fn reason_of(error: ScorerError) -> String {
    match error {
        ScorerError::Initialization { reason, .. } | ScorerError::Execution { reason, .. } => {
            reason
        }
    }
}

#[async_trait]
impl IScorer for TransformerScorer {
    fn name(&self) -> &str {
        TRANSFORMER_SOURCE
    }

    async fn score(&self, text: &str) -> ScorerResult<ScoringResult> {
        let classifier = self.classifier().await?;
        let prediction = classifier
            .classify(text)
            .await
            .map_err(|e| ScorerError::Execution {
                scorer: TRANSFORMER_SOURCE.to_string(),
                reason: reason_of(e),
            })?;
        debug!(label = %prediction.label, score = prediction.score, "model prediction");
        Self::to_result(&prediction)
    }
}
