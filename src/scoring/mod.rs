pub mod vader;

use thiserror::Error;

use crate::model::ScoreSet;

pub use vader::VaderScorer;

#[derive(Debug, Error, PartialEq)]
pub enum ScoringError {
    #[error("scorer returned no \"{0}\" score")]
    MissingScore(&'static str),
    #[error("scorer returned non-finite {field} score: {value}")]
    NonFinite { field: &'static str, value: f64 },
}

/// Maps one text to its polarity scores. Implementations are expected to be
/// pure: the same text always yields the same `ScoreSet`.
pub trait SentimentScorer {
    fn score(&self, text: &str) -> Result<ScoreSet, ScoringError>;
}

impl<F> SentimentScorer for F
where
    F: Fn(&str) -> Result<ScoreSet, ScoringError>,
{
    fn score(&self, text: &str) -> Result<ScoreSet, ScoringError> {
        self(text)
    }
}

pub(crate) fn check_finite(field: &'static str, value: f64) -> Result<f64, ScoringError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ScoringError::NonFinite { field, value })
    }
}
