mod analysis_report;
mod distribution;
mod meter;
mod model_prediction;
mod outcome;
mod scoring_result;
mod sentiment_label;

pub use analysis_report::{AnalysisReport, AnalysisStatus, FailureRecord};
pub use distribution::{AggregateDistribution, SentimentDistribution};
pub use meter::MeterBreakdown;
pub use model_prediction::ModelPrediction;
pub use outcome::ScorerOutcome;
pub use scoring_result::ScoringResult;
pub use sentiment_label::SentimentLabel;
