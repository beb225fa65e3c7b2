use tracing::info;

use crate::model::scores::ScoreTotals;
use crate::model::{BulkReport, LabelDistribution, LabelThresholds};
use crate::pipeline::AnalysisError;
use crate::pipeline::stage1_score::analyze_text;
use crate::scoring::SentimentScorer;

pub fn analyze_bulk<S, T>(
    scorer: &S,
    thresholds: &LabelThresholds,
    texts: &[T],
) -> Result<BulkReport, AnalysisError>
where
    S: SentimentScorer + ?Sized,
    T: AsRef<str>,
{
    if texts.is_empty() {
        return Err(AnalysisError::NoInput);
    }

    let mut results = Vec::with_capacity(texts.len());
    let mut totals = ScoreTotals::default();
    let mut distribution = LabelDistribution::default();

    for text in texts {
        let result = analyze_text(scorer, thresholds, text.as_ref())?;
        totals.add(&result.scores);
        distribution.record(result.sentiment);
        results.push(result);
    }

    let average_scores = totals.rounded_mean().ok_or(AnalysisError::NoInput)?;
    let overall_sentiment = thresholds.classify(average_scores.compound);

    info!(
        total = totals.count(),
        positive = distribution.positive,
        negative = distribution.negative,
        neutral = distribution.neutral,
        average_compound = average_scores.compound,
        %overall_sentiment,
        "batch analyzed"
    );

    Ok(BulkReport {
        overall_sentiment,
        average_scores,
        sentiment_distribution: distribution,
        total_analyzed: totals.count(),
        individual_results: results,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_aggregate.rs"]
mod tests;
