use serde::{Deserialize, Serialize};

/// Raw output of a binary sentiment classification model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelPrediction {
    /// Class label, e.g. "POSITIVE" or "NEGATIVE".
    pub label: String,
    /// Probability of `label`, expected in `[0, 1]`.
    pub score: f64,
}
