//! Test fixture loader for Sentiscope golden datasets, plus mock scorers and
//! model loaders shared by integration tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

use sentiscope_core::models::{SentimentDistribution, SentimentLabel};

pub mod mocks;

/// Root directory of the fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// One expected scorer verdict from `golden/scorers/*.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScorerCase {
    pub name: String,
    pub text: String,
    pub sentiment: SentimentLabel,
    pub confidence: f64,
    pub scores: SentimentDistribution,
}

/// An end-to-end analysis scenario from `golden/analysis/*.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisCase {
    pub text: String,
    pub expected_status: String,
    pub expected_sources: Vec<String>,
    pub expected_aggregate: SentimentDistribution,
}

pub fn lexicon_cases() -> Vec<ScorerCase> {
    load_fixture("golden/scorers/lexicon.json")
}

pub fn heuristic_cases() -> Vec<ScorerCase> {
    load_fixture("golden/scorers/heuristic.json")
}

/// Assert two distributions agree channel by channel within `tolerance`.
pub fn assert_distribution_close(
    actual: &SentimentDistribution,
    expected: &SentimentDistribution,
    tolerance: f64,
    context: &str,
) {
    for label in SentimentLabel::ALL {
        let (a, e) = (actual.get(label), expected.get(label));
        assert!(
            (a - e).abs() <= tolerance,
            "{context}: {label} channel is {a}, expected {e}"
        );
    }
}
