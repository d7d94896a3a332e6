//! Span definitions per operation: analysis and per-scorer invocation.

/// Create an analysis span.
#[macro_export]
macro_rules! analysis_span {
    ($request_id:expr, $scorer_count:expr) => {
        tracing::info_span!(
            $crate::tracing_setup::spans::names::ANALYSIS,
            request_id = %$request_id,
            scorer_count = $scorer_count
        )
    };
}

/// Create a span for one scorer invocation.
#[macro_export]
macro_rules! scorer_span {
    ($scorer:expr) => {
        tracing::debug_span!($crate::tracing_setup::spans::names::SCORER, scorer = %$scorer)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const ANALYSIS: &str = "sentiscope.analysis";
    pub const SCORER: &str = "sentiscope.scorer";
}
