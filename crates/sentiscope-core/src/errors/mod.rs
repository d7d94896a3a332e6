mod config_error;
mod scorer_error;
mod sentiscope_error;

pub use config_error::ConfigError;
pub use scorer_error::{ScorerError, ScorerResult};
pub use sentiscope_error::{SentiscopeError, SentiscopeResult};
