pub mod stage1_score;
pub mod stage2_aggregate;

use thiserror::Error;

use crate::scoring::ScoringError;

pub use stage1_score::analyze_text;
pub use stage2_aggregate::analyze_bulk;

#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error("scoring failed: {0}")]
    Scoring(#[from] ScoringError),
    #[error("no input provided: \"texts\" is empty")]
    NoInput,
}
