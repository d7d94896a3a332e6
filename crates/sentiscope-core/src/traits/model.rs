use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::ScorerResult;
use crate::models::ModelPrediction;

/// A loaded sentiment classification model.
#[async_trait]
pub trait ISentimentClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> ScorerResult<ModelPrediction>;
}

/// Loads a classification model. May be slow and may fail.
#[async_trait]
pub trait ISentimentModelLoader: Send + Sync {
    /// Load the model identified by `model_id`.
    async fn load(&self, model_id: &str) -> ScorerResult<Arc<dyn ISentimentClassifier>>;
}
