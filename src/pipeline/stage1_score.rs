use tracing::debug;

use crate::model::{LabelThresholds, SentimentResult};
use crate::scoring::{ScoringError, SentimentScorer};

pub fn analyze_text<S: SentimentScorer + ?Sized>(
    scorer: &S,
    thresholds: &LabelThresholds,
    text: &str,
) -> Result<SentimentResult, ScoringError> {
    let scores = scorer.score(text)?;
    let sentiment = thresholds.classify(scores.compound);
    debug!(
        chars = text.chars().count(),
        compound = scores.compound,
        %sentiment,
        "scored text"
    );
    Ok(SentimentResult {
        sentiment,
        scores,
        confidence: scores.compound.abs(),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_score.rs"]
mod tests;
