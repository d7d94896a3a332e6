//! # sentiscope-engine
//!
//! Runs every registered scorer against a text concurrently, keeps going
//! when some of them fail, and averages the surviving distributions into the
//! overall verdict.

pub mod aggregator;
pub mod engine;
pub mod orchestrator;
pub mod tracing_setup;

pub use aggregator::Aggregator;
pub use engine::SentimentEngine;
pub use orchestrator::AnalysisOrchestrator;
pub use tracing_setup::init_tracing;
