pub mod json;
pub mod text;

use serde::Serialize;
use thiserror::Error;

use crate::model::{BulkReport, SentimentResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisOutput {
    Single(SentimentResult),
    Bulk(BulkReport),
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

pub fn render(
    output: &AnalysisOutput,
    format: ReportFormat,
    pretty: bool,
) -> Result<String, ReportError> {
    match format {
        ReportFormat::Json => json::render_json(output, pretty),
        ReportFormat::Text => Ok(text::render_report_text(output)),
    }
}

pub fn format_f64_3(v: f64) -> String {
    format!("{:.3}", v)
}

pub fn format_f64_4(v: f64) -> String {
    format!("{:.4}", v)
}
