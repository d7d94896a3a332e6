//! Cross-scorer mean of successful distributions.

use sentiscope_core::models::{
    AggregateDistribution, MeterBreakdown, ScorerOutcome, SentimentDistribution,
};

/// Reduces per-scorer outcomes to one distribution for the overall meter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aggregator;

impl Aggregator {
    pub fn new() -> Self {
        Self
    }

    /// Unweighted per-channel mean over `Success` outcomes.
    ///
    /// Returns the zero distribution when nothing succeeded.
    pub fn aggregate(&self, outcomes: &[ScorerOutcome]) -> AggregateDistribution {
        let (sum, count) = outcomes
            .iter()
            .filter_map(ScorerOutcome::as_success)
            .fold((SentimentDistribution::zero(), 0usize), |(sum, n), r| {
                (sum.add(&r.scores), n + 1)
            });

        if count == 0 {
            return SentimentDistribution::zero();
        }
        sum.scale(1.0 / count as f64)
    }

    /// Percentage view of an aggregate.
    pub fn meter(&self, aggregate: &AggregateDistribution) -> MeterBreakdown {
        MeterBreakdown::from_distribution(aggregate)
    }
}
