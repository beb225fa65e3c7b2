use crate::model::labels::SentimentLabel;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelThresholds {
    pub positive_min: f64,
    pub negative_max: f64,
}

impl LabelThresholds {
    pub fn vader_v1() -> Self {
        Self {
            positive_min: 0.05,
            negative_max: -0.05,
        }
    }

    /// Boundaries are inclusive: exactly `positive_min` is positive and
    /// exactly `negative_max` is negative.
    pub fn classify(&self, compound: f64) -> SentimentLabel {
        if compound >= self.positive_min {
            SentimentLabel::Positive
        } else if compound <= self.negative_max {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

impl Default for LabelThresholds {
    fn default() -> Self {
        Self::vader_v1()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/thresholds.rs"]
mod tests;
