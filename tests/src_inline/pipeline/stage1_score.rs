use super::*;

use crate::model::{ScoreSet, SentimentLabel};
use crate::scoring::VaderScorer;

fn fixed(compound: f64) -> impl Fn(&str) -> Result<ScoreSet, ScoringError> {
    move |_text: &str| {
        Ok(ScoreSet {
            positive: compound.max(0.0),
            negative: (-compound).max(0.0),
            neutral: 1.0 - compound.abs(),
            compound,
        })
    }
}

#[test]
fn test_label_follows_compound_boundaries() {
    let t = LabelThresholds::vader_v1();
    let cases = [
        (0.05, SentimentLabel::Positive),
        (-0.05, SentimentLabel::Negative),
        (0.04, SentimentLabel::Neutral),
        (-0.04, SentimentLabel::Neutral),
        (0.0, SentimentLabel::Neutral),
    ];
    for (compound, expected) in cases {
        let result = analyze_text(&fixed(compound), &t, "x").unwrap();
        assert_eq!(result.sentiment, expected, "compound {compound}");
    }
}

#[test]
fn test_confidence_is_abs_compound_unrounded() {
    let t = LabelThresholds::vader_v1();
    let result = analyze_text(&fixed(-0.57194), &t, "x").unwrap();
    assert_eq!(result.confidence, 0.57194);
    assert_eq!(result.scores.compound, -0.57194);
}

#[test]
fn test_scorer_error_propagates() {
    let t = LabelThresholds::vader_v1();
    let failing = |_text: &str| -> Result<ScoreSet, ScoringError> {
        Err(ScoringError::MissingScore("compound"))
    };
    let err = analyze_text(&failing, &t, "x").unwrap_err();
    assert_eq!(err, ScoringError::MissingScore("compound"));
}

#[test]
fn test_empty_text_with_vader() {
    let scorer = VaderScorer::new();
    let result = analyze_text(&scorer, &LabelThresholds::vader_v1(), "").unwrap();
    assert_eq!(result.sentiment, SentimentLabel::Neutral);
    assert_eq!(result.confidence, 0.0);
    assert_eq!(result.scores.compound, 0.0);
}

#[test]
fn test_same_text_twice_is_identical() {
    let scorer = VaderScorer::new();
    let t = LabelThresholds::vader_v1();
    let a = analyze_text(&scorer, &t, "This is terrible.").unwrap();
    let b = analyze_text(&scorer, &t, "This is terrible.").unwrap();
    assert_eq!(a, b);
    assert_eq!(a.sentiment, SentimentLabel::Negative);
}
