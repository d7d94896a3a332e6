//! Keyword heuristic scorer.
//!
//! Two case-insensitive substring tests decide between four fixed verdicts.
//! The channel that was not selected reports a placeholder (0.2 for the
//! polar channels, 0.6 for neutral) rather than a normalized complement.

use std::sync::LazyLock;

use regex::Regex;
use sentiscope_core::constants::HEURISTIC_SOURCE;
use sentiscope_core::models::{ScoringResult, SentimentDistribution, SentimentLabel};
use sentiscope_core::traits::ISyncScorer;

static POSITIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)good|great|excellent|amazing|love|perfect").expect("static pattern")
});

static NEGATIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)bad|terrible|awful|hate|worst|horrible").expect("static pattern")
});

/// Confidence when only one polarity matched.
pub const SINGLE_POLARITY_CONFIDENCE: f64 = 0.85;
/// Confidence when both polarities matched.
pub const CONFLICTING_CONFIDENCE: f64 = 0.7;
/// Confidence when nothing matched.
pub const NO_SIGNAL_CONFIDENCE: f64 = 0.6;

const POLAR_PLACEHOLDER: f64 = 0.2;
const NEUTRAL_PLACEHOLDER: f64 = 0.6;

/// Regex keyword scorer. Pure and infallible.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicScorer;

impl HeuristicScorer {
    pub fn new() -> Self {
        Self
    }

    fn verdict(has_positive: bool, has_negative: bool) -> (SentimentLabel, f64) {
        match (has_positive, has_negative) {
            (true, false) => (SentimentLabel::Positive, SINGLE_POLARITY_CONFIDENCE),
            (false, true) => (SentimentLabel::Negative, SINGLE_POLARITY_CONFIDENCE),
            (true, true) => (SentimentLabel::Neutral, CONFLICTING_CONFIDENCE),
            (false, false) => (SentimentLabel::Neutral, NO_SIGNAL_CONFIDENCE),
        }
    }
}

impl ISyncScorer for HeuristicScorer {
    fn name(&self) -> &str {
        HEURISTIC_SOURCE
    }

    fn score_text(&self, text: &str) -> ScoringResult {
        let (sentiment, confidence) =
            Self::verdict(POSITIVE_RE.is_match(text), NEGATIVE_RE.is_match(text));

        let channel = |label: SentimentLabel, placeholder: f64| {
            if sentiment == label {
                confidence
            } else {
                placeholder
            }
        };
        let scores = SentimentDistribution::new(
            channel(SentimentLabel::Positive, POLAR_PLACEHOLDER),
            channel(SentimentLabel::Neutral, NEUTRAL_PLACEHOLDER),
            channel(SentimentLabel::Negative, POLAR_PLACEHOLDER),
        );

        ScoringResult::new(HEURISTIC_SOURCE, sentiment, confidence, scores)
    }
}
