use proptest::prelude::*;
use sentiscope_core::models::{MeterBreakdown, SentimentDistribution, SentimentLabel};

fn channel() -> impl Strategy<Value = f64> {
    0.0f64..=1.0
}

proptest! {
    #[test]
    fn meter_percentages_sum_to_100(p in channel(), n in channel(), neg in channel()) {
        let dist = SentimentDistribution::new(p, n, neg);
        prop_assume!(dist.total() > 1e-9);
        let meter = MeterBreakdown::from_distribution(&dist);
        let sum = meter.positive_pct + meter.neutral_pct + meter.negative_pct;
        prop_assert!((sum - 100.0).abs() < 1e-9, "sum was {}", sum);
        prop_assert_eq!(meter.dominant, dist.dominant());
    }

    #[test]
    fn dominant_is_a_strict_maximum_or_neutral(p in channel(), n in channel(), neg in channel()) {
        let dist = SentimentDistribution::new(p, n, neg);
        match dist.dominant() {
            SentimentLabel::Positive => prop_assert!(p > n && p > neg),
            SentimentLabel::Negative => prop_assert!(neg > n && neg > p),
            SentimentLabel::Neutral => prop_assert!(!(p > n && p > neg) && !(neg > n && neg > p)),
        }
    }

    #[test]
    fn polar_tie_breaks_to_neutral(v in 0.01f64..=1.0, n in 0.0f64..0.01) {
        let dist = SentimentDistribution::new(v, n, v);
        prop_assert_eq!(dist.dominant(), SentimentLabel::Neutral);
    }
}

#[test]
fn zero_distribution_meter_is_all_zero() {
    let meter = MeterBreakdown::from_distribution(&SentimentDistribution::zero());
    assert_eq!(meter.positive_pct + meter.neutral_pct + meter.negative_pct, 0.0);
    assert_eq!(meter.dominant, SentimentLabel::Neutral);
}
