use serde::Serialize;

use crate::model::labels::SentimentLabel;
use crate::model::scores::ScoreSet;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentResult {
    pub sentiment: SentimentLabel,
    pub scores: ScoreSet,
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LabelDistribution {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl LabelDistribution {
    pub fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }

    pub fn count(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    /// Whole-number share of each label, in positive/negative/neutral order.
    /// The three values are rounded independently and need not sum to 100.
    pub fn percentages(&self) -> [u32; 3] {
        let total = self.total();
        if total == 0 {
            return [0; 3];
        }
        let pct = |count: usize| (count as f64 / total as f64 * 100.0).round() as u32;
        [pct(self.positive), pct(self.negative), pct(self.neutral)]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulkReport {
    pub overall_sentiment: SentimentLabel,
    pub average_scores: ScoreSet,
    pub sentiment_distribution: LabelDistribution,
    pub total_analyzed: usize,
    pub individual_results: Vec<SentimentResult>,
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/results.rs"]
mod tests;
