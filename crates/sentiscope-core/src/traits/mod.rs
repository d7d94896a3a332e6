mod model;
mod scorer;

pub use model::{ISentimentClassifier, ISentimentModelLoader};
pub use scorer::{IScorer, ISyncScorer};
