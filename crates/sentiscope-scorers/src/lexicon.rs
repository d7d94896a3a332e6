//! Word-polarity lexicon scorer.
//!
//! Counts whole-token hits against two fixed word lists and normalizes the
//! counts by the number of tokens. No stemming, no partial matches.

use sentiscope_core::constants::LEXICON_SOURCE;
use sentiscope_core::models::{ScoringResult, SentimentDistribution, SentimentLabel};
use sentiscope_core::traits::ISyncScorer;
use tracing::debug;

/// Polarity-bearing positive words.
pub const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "amazing",
    "wonderful",
    "fantastic",
    "awesome",
    "love",
    "like",
    "enjoy",
    "happy",
    "pleased",
    "satisfied",
    "perfect",
    "best",
    "brilliant",
    "outstanding",
    "superb",
    "magnificent",
    "incredible",
    "fabulous",
];

/// Polarity-bearing negative words.
pub const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "horrible",
    "hate",
    "dislike",
    "worst",
    "poor",
    "disappointing",
    "frustrated",
    "angry",
    "sad",
    "upset",
    "disgusting",
    "pathetic",
    "useless",
    "worthless",
    "nightmare",
    "disaster",
    "ridiculous",
    "stupid",
];

/// Polar scores are tripled before being reported as confidence.
const CONFIDENCE_GAIN: f64 = 3.0;

/// Neutral verdicts never report less than this confidence.
const NEUTRAL_CONFIDENCE_FLOOR: f64 = 0.5;

/// Lexicon-based scorer. Pure and infallible.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl LexiconScorer {
    pub fn new() -> Self {
        Self
    }

    /// Lowercase and split on runs of non-word characters. Word characters
    /// are ASCII letters, digits and `_`.
    fn tokenize(text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl ISyncScorer for LexiconScorer {
    fn name(&self) -> &str {
        LEXICON_SOURCE
    }

    fn score_text(&self, text: &str) -> ScoringResult {
        let tokens = Self::tokenize(text);

        let mut positive_hits = 0usize;
        let mut negative_hits = 0usize;
        for token in &tokens {
            if POSITIVE_WORDS.contains(&token.as_str()) {
                positive_hits += 1;
            } else if NEGATIVE_WORDS.contains(&token.as_str()) {
                negative_hits += 1;
            }
        }

        // Empty text normalizes against one token.
        let token_count = tokens.len().max(1) as f64;
        let norm_pos = positive_hits as f64 / token_count;
        let norm_neg = negative_hits as f64 / token_count;
        let neutral = (1.0 - norm_pos - norm_neg).max(0.0);

        let (sentiment, confidence) = if norm_pos > norm_neg && norm_pos > neutral {
            (
                SentimentLabel::Positive,
                (norm_pos * CONFIDENCE_GAIN).min(1.0),
            )
        } else if norm_neg > norm_pos && norm_neg > neutral {
            (
                SentimentLabel::Negative,
                (norm_neg * CONFIDENCE_GAIN).min(1.0),
            )
        } else {
            (
                SentimentLabel::Neutral,
                neutral.max(NEUTRAL_CONFIDENCE_FLOOR),
            )
        };

        debug!(
            tokens = tokens.len(),
            positive_hits,
            negative_hits,
            sentiment = %sentiment,
            "lexicon scored text"
        );

        // Scores stay as computed above; only confidence gets the floor.
        ScoringResult::new(
            LEXICON_SOURCE,
            sentiment,
            confidence,
            SentimentDistribution::new(norm_pos, neutral, norm_neg),
        )
    }
}
