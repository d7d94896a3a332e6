use serde::{Deserialize, Serialize};

use super::{SentimentDistribution, SentimentLabel};

/// Percentage view of an aggregate, as drawn by the overall meter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeterBreakdown {
    pub positive_pct: f64,
    pub neutral_pct: f64,
    pub negative_pct: f64,
    pub dominant: SentimentLabel,
}

impl MeterBreakdown {
    /// Share of each channel in the distribution total, in percent.
    /// All shares are 0 when the total is 0.
    pub fn from_distribution(dist: &SentimentDistribution) -> Self {
        let total = dist.total();
        let share = |v: f64| if total > 0.0 { v / total * 100.0 } else { 0.0 };
        Self {
            positive_pct: share(dist.positive),
            neutral_pct: share(dist.neutral),
            negative_pct: share(dist.negative),
            dominant: dist.dominant(),
        }
    }
}
