use std::collections::HashMap;

use vader_sentiment::SentimentIntensityAnalyzer;

use crate::model::ScoreSet;
use crate::scoring::{ScoringError, SentimentScorer, check_finite};

pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for VaderScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaderScorer").finish_non_exhaustive()
    }
}

impl SentimentScorer for VaderScorer {
    fn score(&self, text: &str) -> Result<ScoreSet, ScoringError> {
        let raw = self.analyzer.polarity_scores(text);
        scores_from_polarity(&raw)
    }
}

// VADER reports `pos`/`neg`/`neu`/`compound`.
pub(crate) fn scores_from_polarity(raw: &HashMap<&str, f64>) -> Result<ScoreSet, ScoringError> {
    let get = |key: &'static str, field: &'static str| -> Result<f64, ScoringError> {
        let value = raw
            .get(key)
            .copied()
            .ok_or(ScoringError::MissingScore(key))?;
        check_finite(field, value)
    };
    Ok(ScoreSet {
        positive: get("pos", "positive")?,
        negative: get("neg", "negative")?,
        neutral: get("neu", "neutral")?,
        compound: get("compound", "compound")?,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/vader.rs"]
mod tests;
