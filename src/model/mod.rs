pub mod labels;
pub mod results;
pub mod scores;
pub mod thresholds;

pub use labels::SentimentLabel;
pub use results::{BulkReport, LabelDistribution, SentimentResult};
pub use scores::ScoreSet;
pub use thresholds::LabelThresholds;
