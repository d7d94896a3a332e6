//! Builds the scorer set from configuration.
//!
//! Registration order is fixed: transformer, lexicon, heuristic.

use std::sync::Arc;

use sentiscope_core::config::ScorersConfig;
use sentiscope_core::traits::{IScorer, ISentimentModelLoader};
use tracing::{info, warn};

use crate::{HeuristicScorer, LexiconScorer, SyncScorer, TransformerScorer};

/// Create every enabled built-in scorer.
///
/// The transformer is only registered when a model loader is supplied.
pub fn create_scorers(
    config: &ScorersConfig,
    loader: Option<Arc<dyn ISentimentModelLoader>>,
) -> Vec<Arc<dyn IScorer>> {
    let mut scorers: Vec<Arc<dyn IScorer>> = Vec::new();

    if config.transformer_enabled {
        match loader {
            Some(loader) => {
                scorers.push(Arc::new(TransformerScorer::new(
                    loader,
                    config.transformer_model.clone(),
                )));
            }
            None => warn!(
                model = %config.transformer_model,
                "transformer scorer enabled but no model loader supplied, skipping"
            ),
        }
    }
    if config.lexicon_enabled {
        scorers.push(Arc::new(SyncScorer::new(LexiconScorer::new())));
    }
    if config.heuristic_enabled {
        scorers.push(Arc::new(SyncScorer::new(HeuristicScorer::new())));
    }

    info!(
        scorers = ?scorers.iter().map(|s| s.name()).collect::<Vec<_>>(),
        "scorers registered"
    );
    scorers
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use sentiscope_core::constants::{HEURISTIC_SOURCE, LEXICON_SOURCE, TRANSFORMER_SOURCE};
    use sentiscope_core::errors::{ScorerError, ScorerResult};
    use sentiscope_core::traits::ISentimentClassifier;

    struct UnusedLoader;

    #[async_trait]
    impl ISentimentModelLoader for UnusedLoader {
        async fn load(&self, _model_id: &str) -> ScorerResult<Arc<dyn ISentimentClassifier>> {
            Err(ScorerError::Initialization {
                scorer: "unused".into(),
                reason: "not loaded in this test".into(),
            })
        }
    }

    fn loader() -> Option<Arc<dyn ISentimentModelLoader>> {
        let loader: Arc<dyn ISentimentModelLoader> = Arc::new(UnusedLoader);
        Some(loader)
    }

    fn names(scorers: &[Arc<dyn IScorer>]) -> Vec<String> {
        scorers.iter().map(|s| s.name().to_string()).collect()
    }

    #[test]
    fn defaults_with_loader_register_all_in_order() {
        let scorers = create_scorers(&ScorersConfig::default(), loader());
        assert_eq!(
            names(&scorers),
            vec![TRANSFORMER_SOURCE, LEXICON_SOURCE, HEURISTIC_SOURCE]
        );
    }

    #[test]
    fn missing_loader_skips_transformer() {
        let scorers = create_scorers(&ScorersConfig::default(), None);
        assert_eq!(names(&scorers), vec![LEXICON_SOURCE, HEURISTIC_SOURCE]);
    }

    #[test]
    fn disabled_scorers_are_not_registered() {
        let config = ScorersConfig {
            lexicon_enabled: false,
            transformer_enabled: false,
            ..Default::default()
        };
        let scorers = create_scorers(&config, loader());
        assert_eq!(names(&scorers), vec![HEURISTIC_SOURCE]);
    }
}
