use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScoreSet {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub compound: f64,
}

/// Running per-field sums over a batch of score sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreTotals {
    sums: ScoreSet,
    count: usize,
}

impl ScoreTotals {
    pub fn add(&mut self, scores: &ScoreSet) {
        self.sums.positive += scores.positive;
        self.sums.negative += scores.negative;
        self.sums.neutral += scores.neutral;
        self.sums.compound += scores.compound;
        self.count += 1;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Per-field means rounded to three decimals; `None` for an empty batch.
    pub fn rounded_mean(&self) -> Option<ScoreSet> {
        if self.count == 0 {
            return None;
        }
        let n = self.count as f64;
        Some(ScoreSet {
            positive: round3(self.sums.positive / n),
            negative: round3(self.sums.negative / n),
            neutral: round3(self.sums.neutral / n),
            compound: round3(self.sums.compound / n),
        })
    }
}

/// Round to three decimals on the exact binary value; only true decimal
/// ties go to even.
pub fn round3(v: f64) -> f64 {
    format!("{v:.3}").parse().unwrap_or(v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/scores.rs"]
mod tests;
