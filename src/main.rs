mod input;
mod logging;
mod model;
mod pipeline;
mod report;
mod scoring;

use clap::Parser;
use thiserror::Error;
use tracing::{debug, info};

use crate::input::{AnalysisRequest, InputError, read_request_arg};
use crate::model::LabelThresholds;
use crate::pipeline::{AnalysisError, analyze_bulk, analyze_text};
use crate::report::{AnalysisOutput, ReportError, ReportFormat, render};
use crate::scoring::{ScoringError, SentimentScorer, VaderScorer};

/// Score the sentiment of one text or a batch of texts with VADER.
#[derive(Parser, Debug)]
#[command(name = "synsight-sentiment", version)]
struct Cli {
    /// JSON request: {"text": "..."} or {"texts": ["...", ...]}; "-" reads it from stdin
    #[arg(value_name = "REQUEST")]
    request: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Json)]
    format: ReportFormat,

    /// Indent JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("invalid request: {0}")]
    Input(#[from] InputError),
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

impl From<ScoringError> for CliError {
    fn from(value: ScoringError) -> Self {
        CliError::Analysis(AnalysisError::Scoring(value))
    }
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        debug!(?err, "run failed");
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let request = read_request_arg(&cli.request)?;
    info!(texts = request.text_count(), "request accepted");

    let scorer = VaderScorer::new();
    let output = analyze(&scorer, &LabelThresholds::vader_v1(), &request)?;
    let rendered = render(&output, cli.format, cli.pretty)?;
    println!("{rendered}");
    Ok(())
}

fn analyze<S: SentimentScorer + ?Sized>(
    scorer: &S,
    thresholds: &LabelThresholds,
    request: &AnalysisRequest,
) -> Result<AnalysisOutput, CliError> {
    let output = match request {
        AnalysisRequest::Single { text } => {
            AnalysisOutput::Single(analyze_text(scorer, thresholds, text)?)
        }
        AnalysisRequest::Bulk { texts } => {
            AnalysisOutput::Bulk(analyze_bulk(scorer, thresholds, texts.as_slice())?)
        }
    };
    Ok(output)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
