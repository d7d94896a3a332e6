//! # sentiscope-scorers
//!
//! The scoring methods an analysis fans out to:
//! - `LexiconScorer`: whole-token polarity word counts
//! - `HeuristicScorer`: substring keyword rules with fixed confidence tiers
//! - `TransformerScorer`: an opaque model, loaded once on first use
//!
//! Synchronous scorers are exposed as `IScorer` through `SyncScorer`.

pub mod adapter;
pub mod heuristic;
pub mod lexicon;
pub mod registry;
pub mod transformer;

pub use adapter::SyncScorer;
pub use heuristic::HeuristicScorer;
pub use lexicon::LexiconScorer;
pub use registry::create_scorers;
pub use transformer::TransformerScorer;
