pub mod defaults;
mod observability_config;
mod scorers_config;

pub use observability_config::ObservabilityConfig;
pub use scorers_config::ScorersConfig;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SentiscopeConfig {
    pub scorers: ScorersConfig,
    pub observability: ObservabilityConfig,
}

impl SentiscopeConfig {
    /// Parse a TOML document. An empty document yields the defaults.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scorers = &self.scorers;
        if !scorers.lexicon_enabled && !scorers.heuristic_enabled && !scorers.transformer_enabled
        {
            return Err(ConfigError::InvalidValue {
                field: "scorers".to_string(),
                reason: "at least one scorer must be enabled".to_string(),
            });
        }
        if scorers.transformer_enabled && scorers.transformer_model.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "scorers.transformer_model".to_string(),
                reason: "model id must not be empty".to_string(),
            });
        }
        let level = self.observability.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "observability.log_level".to_string(),
                reason: format!("unknown level '{}'", self.observability.log_level),
            });
        }
        Ok(())
    }
}
