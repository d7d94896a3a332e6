use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::SentiscopeResult;

use super::{AggregateDistribution, MeterBreakdown, ScoringResult};

/// Overall state of one analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    /// Every registered scorer succeeded.
    Complete,
    /// Some scorers succeeded, some failed.
    Partial,
    /// No scorer succeeded.
    Failed,
}

impl AnalysisStatus {
    pub fn from_counts(successes: usize, failures: usize) -> Self {
        match (successes, failures) {
            (0, _) => Self::Failed,
            (_, 0) => Self::Complete,
            _ => Self::Partial,
        }
    }
}

/// A scorer that failed during an analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureRecord {
    pub source: String,
    pub error: String,
}

/// Everything the presentation layer needs for one analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Lets callers discard reports of superseded requests.
    pub request_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub aggregate: AggregateDistribution,
    /// Successful results only, in scorer registration order.
    pub per_source: Vec<ScoringResult>,
    pub failures: Vec<FailureRecord>,
    pub status: AnalysisStatus,
}

impl AnalysisReport {
    pub fn meter(&self) -> MeterBreakdown {
        MeterBreakdown::from_distribution(&self.aggregate)
    }

    pub fn to_json(&self) -> SentiscopeResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
