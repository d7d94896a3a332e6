//! Mock scorers and model loaders.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use sentiscope_core::errors::{ScorerError, ScorerResult};
use sentiscope_core::models::{
    ModelPrediction, ScoringResult, SentimentDistribution, SentimentLabel,
};
use sentiscope_core::traits::{IScorer, ISentimentClassifier, ISentimentModelLoader};

/// A scorer that returns the same result for every text, optionally after
/// sleeping.
pub struct FixedScorer {
    name: String,
    sentiment: SentimentLabel,
    scores: SentimentDistribution,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl FixedScorer {
    pub fn new(name: &str, scores: SentimentDistribution) -> Self {
        Self {
            name: name.to_string(),
            sentiment: scores.dominant(),
            scores,
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IScorer for FixedScorer {
    fn name(&self) -> &str {
        &self.name
    }

    async fn score(&self, _text: &str) -> ScorerResult<ScoringResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(ScoringResult::new(
            self.name.clone(),
            self.sentiment,
            self.scores.get(self.sentiment),
            self.scores,
        ))
    }
}

/// A scorer that always fails with an execution error.
pub struct FailingScorer {
    name: String,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl FailingScorer {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IScorer for FailingScorer {
    fn name(&self) -> &str {
        &self.name
    }

    async fn score(&self, _text: &str) -> ScorerResult<ScoringResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Err(ScorerError::Execution {
            scorer: self.name.clone(),
            reason: "mock failure".to_string(),
        })
    }
}

/// A classifier that always returns the same prediction.
pub struct StaticClassifier {
    prediction: ModelPrediction,
}

impl StaticClassifier {
    pub fn new(label: &str, score: f64) -> Self {
        Self {
            prediction: ModelPrediction {
                label: label.to_string(),
                score,
            },
        }
    }
}

#[async_trait]
impl ISentimentClassifier for StaticClassifier {
    async fn classify(&self, _text: &str) -> ScorerResult<ModelPrediction> {
        Ok(self.prediction.clone())
    }
}

/// A model loader that counts loads, can be slow, and can fail its first
/// `fail_first` attempts.
pub struct CountingLoader {
    label: String,
    score: f64,
    delay: Option<Duration>,
    fail_first: usize,
    loads: AtomicUsize,
}

impl CountingLoader {
    pub fn new(label: &str, score: f64) -> Self {
        Self {
            label: label.to_string(),
            score,
            delay: None,
            fail_first: 0,
            loads: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn failing_first(mut self, attempts: usize) -> Self {
        self.fail_first = attempts;
        self
    }

    /// Number of load attempts so far, successful or not.
    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ISentimentModelLoader for CountingLoader {
    async fn load(&self, model_id: &str) -> ScorerResult<Arc<dyn ISentimentClassifier>> {
        let attempt = self.loads.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if attempt < self.fail_first {
            return Err(ScorerError::Initialization {
                scorer: model_id.to_string(),
                reason: format!("mock load failure {}", attempt + 1),
            });
        }
        Ok(Arc::new(StaticClassifier::new(&self.label, self.score)))
    }
}
