use proptest::prelude::*;
use sentiscope_core::errors::ScorerError;
use sentiscope_core::models::{ScorerOutcome, ScoringResult, SentimentDistribution};
use sentiscope_engine::Aggregator;

fn outcome_strategy() -> impl Strategy<Value = ScorerOutcome> {
    prop_oneof![
        (0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0).prop_map(|(p, n, neg)| {
            let scores = SentimentDistribution::new(p, n, neg);
            let label = scores.dominant();
            ScorerOutcome::Success(ScoringResult::new("s", label, scores.get(label), scores))
        }),
        Just(ScorerOutcome::Failure {
            source: "f".to_string(),
            error: ScorerError::Execution {
                scorer: "f".to_string(),
                reason: "x".to_string(),
            },
        }),
    ]
}

proptest! {
    #[test]
    fn aggregate_is_permutation_invariant(
        (outcomes, shuffled) in prop::collection::vec(outcome_strategy(), 0..8)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let aggregator = Aggregator::new();
        let a = aggregator.aggregate(&outcomes);
        let b = aggregator.aggregate(&shuffled);
        prop_assert!((a.positive - b.positive).abs() < 1e-9);
        prop_assert!((a.neutral - b.neutral).abs() < 1e-9);
        prop_assert!((a.negative - b.negative).abs() < 1e-9);
    }

    #[test]
    fn aggregate_stays_in_unit_range(outcomes in prop::collection::vec(outcome_strategy(), 0..8)) {
        let agg = Aggregator::new().aggregate(&outcomes);
        for v in [agg.positive, agg.neutral, agg.negative] {
            prop_assert!((0.0..=1.0 + 1e-12).contains(&v));
        }
    }

    #[test]
    fn aggregate_of_failures_only_is_zero(n in 0usize..6) {
        let outcomes: Vec<ScorerOutcome> = (0..n)
            .map(|_| ScorerOutcome::Failure {
                source: "f".to_string(),
                error: ScorerError::Execution {
                    scorer: "f".to_string(),
                    reason: "x".to_string(),
                },
            })
            .collect();
        prop_assert_eq!(Aggregator::new().aggregate(&outcomes), SentimentDistribution::zero());
    }
}
