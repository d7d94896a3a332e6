//! Lazy model initialization behavior of the transformer scorer.

use std::sync::Arc;
use std::time::Duration;

use sentiscope_core::errors::{ScorerError, SentiscopeError};
use sentiscope_core::models::SentimentLabel;
use sentiscope_core::traits::IScorer;
use sentiscope_scorers::TransformerScorer;
use test_fixtures::mocks::CountingLoader;

const MODEL: &str = "test/model";

#[tokio::test]
async fn model_is_loaded_on_first_score_only() {
    let loader = Arc::new(CountingLoader::new("POSITIVE", 0.9));
    let scorer = TransformerScorer::new(loader.clone(), MODEL);
    assert!(!scorer.is_loaded());

    let first = scorer.score("I love it").await.unwrap();
    let second = scorer.score("I love it").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.source, "Hugging Face");
    assert_eq!(first.sentiment, SentimentLabel::Positive);
    assert!(scorer.is_loaded());
    assert_eq!(loader.loads(), 1);
}

#[tokio::test]
async fn concurrent_first_calls_share_one_load() {
    let loader = Arc::new(CountingLoader::new("NEGATIVE", 0.8).with_delay(Duration::from_millis(50)));
    let scorer = TransformerScorer::new(loader.clone(), MODEL);

    let (a, b, c) = tokio::join!(
        scorer.score("one"),
        scorer.score("two"),
        scorer.score("three")
    );

    assert!(a.is_ok() && b.is_ok() && c.is_ok());
    assert_eq!(loader.loads(), 1);
}

#[tokio::test]
async fn concurrent_first_calls_share_one_load_across_tasks() {
    let loader = Arc::new(CountingLoader::new("POSITIVE", 0.7).with_delay(Duration::from_millis(50)));
    let scorer = Arc::new(TransformerScorer::new(loader.clone(), MODEL));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let scorer = scorer.clone();
            tokio::spawn(async move { scorer.score(&format!("text {i}")).await })
        })
        .collect();
    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }
    assert_eq!(loader.loads(), 1);
}

#[tokio::test]
async fn failed_load_is_initialization_error_and_retried_later() {
    let loader = Arc::new(CountingLoader::new("POSITIVE", 0.9).failing_first(1));
    let scorer = TransformerScorer::new(loader.clone(), MODEL);

    let err = scorer.score("first").await.unwrap_err();
    assert!(err.is_initialization());
    assert_eq!(err.scorer(), "Hugging Face");
    assert!(!scorer.is_loaded());

    let ok = scorer.score("second").await.unwrap();
    assert_eq!(ok.sentiment, SentimentLabel::Positive);
    assert_eq!(loader.loads(), 2);
}

#[tokio::test]
async fn warm_up_surfaces_load_failure() {
    let loader = Arc::new(CountingLoader::new("POSITIVE", 0.9).failing_first(1));
    let scorer = TransformerScorer::new(loader, MODEL);

    let err = scorer.warm_up().await.unwrap_err();
    assert!(matches!(
        err,
        SentiscopeError::ScorerError(ScorerError::Initialization { .. })
    ));
    scorer.warm_up().await.unwrap();
    assert!(scorer.is_loaded());
}

#[tokio::test]
async fn invalid_model_score_is_execution_error() {
    let loader = Arc::new(CountingLoader::new("POSITIVE", 1.2));
    let scorer = TransformerScorer::new(loader, MODEL);

    let err = scorer.score("text").await.unwrap_err();
    assert!(matches!(err, ScorerError::Execution { .. }));
    // The model itself loaded fine.
    assert!(scorer.is_loaded());
}
