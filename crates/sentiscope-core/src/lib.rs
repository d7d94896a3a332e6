//! # sentiscope-core
//!
//! Foundation crate for the Sentiscope sentiment system.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SentiscopeConfig;
pub use errors::{ScorerError, ScorerResult, SentiscopeError, SentiscopeResult};
pub use models::{
    AggregateDistribution, AnalysisReport, AnalysisStatus, ScorerOutcome, ScoringResult,
    SentimentDistribution, SentimentLabel,
};
pub use traits::IScorer;
