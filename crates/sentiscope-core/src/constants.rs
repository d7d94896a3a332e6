// Display labels and fixed identifiers shared across crates.

/// Source label of the lexicon (word polarity) scorer.
pub const LEXICON_SOURCE: &str = "VADER Sentiment";

/// Source label of the keyword heuristic scorer.
pub const HEURISTIC_SOURCE: &str = "AWS Comprehend";

/// Source label of the transformer scorer.
pub const TRANSFORMER_SOURCE: &str = "Hugging Face";

/// Default transformer model id handed to the model loader.
pub const DEFAULT_TRANSFORMER_MODEL: &str = "Xenova/distilbert-base-uncased-finetuned-sst-2-english";

/// Label emitted by binary sentiment models for the positive class.
pub const MODEL_POSITIVE_LABEL: &str = "POSITIVE";

/// Neutral channel reported alongside binary model predictions.
pub const MODEL_NEUTRAL_SCORE: f64 = 0.1;
