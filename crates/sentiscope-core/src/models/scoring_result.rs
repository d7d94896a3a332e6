use serde::{Deserialize, Serialize};

use super::{SentimentDistribution, SentimentLabel};

/// One scorer's verdict on one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    /// Human-readable scorer label, e.g. "VADER Sentiment".
    pub source: String,
    pub sentiment: SentimentLabel,
    /// Confidence in `[0, 1]`.
    pub confidence: f64,
    pub scores: SentimentDistribution,
}

impl ScoringResult {
    pub fn new(
        source: impl Into<String>,
        sentiment: SentimentLabel,
        confidence: f64,
        scores: SentimentDistribution,
    ) -> Self {
        Self {
            source: source.into(),
            sentiment,
            confidence,
            scores,
        }
    }

    /// Whether `sentiment` is the tie-to-neutral argmax of `scores`.
    pub fn is_consistent(&self) -> bool {
        self.sentiment == self.scores.dominant()
    }
}
