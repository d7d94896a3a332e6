use sentiscope_core::traits::ISyncScorer;
use sentiscope_scorers::{HeuristicScorer, LexiconScorer};
use proptest::prelude::*;

fn in_unit_range(v: f64) -> bool {
    (0.0..=1.0).contains(&v)
}

proptest! {
    #[test]
    fn lexicon_label_is_argmax_of_scores(s in ".{0,200}") {
        let r = LexiconScorer::new().score_text(&s);
        prop_assert!(r.is_consistent(), "label {} vs scores {:?}", r.sentiment, r.scores);
    }

    #[test]
    fn lexicon_values_stay_in_unit_range(s in ".{0,200}") {
        let r = LexiconScorer::new().score_text(&s);
        prop_assert!(in_unit_range(r.confidence));
        prop_assert!(in_unit_range(r.scores.positive));
        prop_assert!(in_unit_range(r.scores.neutral));
        prop_assert!(in_unit_range(r.scores.negative));
    }

    #[test]
    fn lexicon_neutral_confidence_has_floor(s in "[a-z ]{0,80}") {
        let r = LexiconScorer::new().score_text(&s);
        if r.sentiment == sentiscope_core::SentimentLabel::Neutral {
            prop_assert!(r.confidence >= 0.5);
        }
    }

    #[test]
    fn lexicon_is_case_insensitive(s in "[a-zA-Z ,.!]{0,120}") {
        let lower = LexiconScorer::new().score_text(&s.to_lowercase());
        let upper = LexiconScorer::new().score_text(&s.to_uppercase());
        prop_assert_eq!(lower, upper);
    }

    #[test]
    fn heuristic_label_is_argmax_of_scores(s in ".{0,200}") {
        let r = HeuristicScorer::new().score_text(&s);
        prop_assert!(r.is_consistent());
        prop_assert_eq!(r.confidence, r.scores.get(r.sentiment));
    }

    #[test]
    fn heuristic_confidence_is_a_fixed_tier(s in ".{0,200}") {
        let r = HeuristicScorer::new().score_text(&s);
        prop_assert!([0.85, 0.7, 0.6].contains(&r.confidence));
    }
}
