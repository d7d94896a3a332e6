use serde::{Deserialize, Serialize};

use super::defaults;

/// Which scorers an engine registers, and how the transformer is loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorersConfig {
    /// Register the word-polarity lexicon scorer.
    pub lexicon_enabled: bool,
    /// Register the keyword heuristic scorer.
    pub heuristic_enabled: bool,
    /// Register the transformer scorer (requires a model loader).
    pub transformer_enabled: bool,
    /// Model id passed to the transformer model loader.
    pub transformer_model: String,
}

impl Default for ScorersConfig {
    fn default() -> Self {
        Self {
            lexicon_enabled: defaults::DEFAULT_LEXICON_ENABLED,
            heuristic_enabled: defaults::DEFAULT_HEURISTIC_ENABLED,
            transformer_enabled: defaults::DEFAULT_TRANSFORMER_ENABLED,
            transformer_model: defaults::DEFAULT_TRANSFORMER_MODEL.to_string(),
        }
    }
}
