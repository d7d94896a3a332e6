use serde::{Deserialize, Serialize};

use super::SentimentLabel;

/// Scores over the three sentiment classes.
///
/// Values are not required to sum to 1. Scorers keep each channel in
/// `[0, 1]`, but the channels are reported as the scorer computed them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentDistribution {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

/// Cross-scorer mean distribution shown as the overall verdict.
pub type AggregateDistribution = SentimentDistribution;

impl SentimentDistribution {
    pub fn new(positive: f64, neutral: f64, negative: f64) -> Self {
        Self {
            positive,
            neutral,
            negative,
        }
    }

    /// The all-zero distribution.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Score of a single channel.
    pub fn get(&self, label: SentimentLabel) -> f64 {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Neutral => self.neutral,
            SentimentLabel::Negative => self.negative,
        }
    }

    /// Sum of all three channels.
    pub fn total(&self) -> f64 {
        self.positive + self.neutral + self.negative
    }

    /// Label with the strictly largest score. Any tie resolves to neutral.
    pub fn dominant(&self) -> SentimentLabel {
        if self.positive > self.neutral && self.positive > self.negative {
            SentimentLabel::Positive
        } else if self.negative > self.neutral && self.negative > self.positive {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    /// Channel-wise sum.
    pub fn add(&self, other: &Self) -> Self {
        Self {
            positive: self.positive + other.positive,
            neutral: self.neutral + other.neutral,
            negative: self.negative + other.negative,
        }
    }

    /// Every channel multiplied by `factor`.
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            positive: self.positive * factor,
            neutral: self.neutral * factor,
            negative: self.negative * factor,
        }
    }
}
