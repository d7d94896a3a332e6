// Single source of truth for all default values.

use crate::constants;

// --- Scorers ---
pub const DEFAULT_LEXICON_ENABLED: bool = true;
pub const DEFAULT_HEURISTIC_ENABLED: bool = true;
pub const DEFAULT_TRANSFORMER_ENABLED: bool = true;
pub const DEFAULT_TRANSFORMER_MODEL: &str = constants::DEFAULT_TRANSFORMER_MODEL;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
