use super::*;

use crate::model::{ScoreSet, SentimentLabel};

fn constant(compound: f64) -> impl Fn(&str) -> Result<ScoreSet, ScoringError> {
    move |_text: &str| {
        Ok(ScoreSet {
            positive: 0.0,
            negative: 0.0,
            neutral: 1.0,
            compound,
        })
    }
}

#[test]
fn test_cli_defaults() {
    let cli = Cli::try_parse_from(["synsight-sentiment", r#"{"text":"hi"}"#]).unwrap();
    assert_eq!(cli.request, r#"{"text":"hi"}"#);
    assert_eq!(cli.format, ReportFormat::Json);
    assert!(!cli.pretty);
}

#[test]
fn test_cli_text_format() {
    let cli = Cli::try_parse_from(["synsight-sentiment", "--format", "text", "--pretty", "-"])
        .unwrap();
    assert_eq!(cli.format, ReportFormat::Text);
    assert!(cli.pretty);
    assert_eq!(cli.request, "-");
}

#[test]
fn test_cli_requires_request() {
    assert!(Cli::try_parse_from(["synsight-sentiment"]).is_err());
}

#[test]
fn test_analyze_dispatches_single() {
    let request = AnalysisRequest::Single {
        text: "hi".to_string(),
    };
    let out = analyze(&constant(0.3), &LabelThresholds::vader_v1(), &request).unwrap();
    match out {
        AnalysisOutput::Single(result) => assert_eq!(result.sentiment, SentimentLabel::Positive),
        AnalysisOutput::Bulk(_) => panic!("expected single result"),
    }
}

#[test]
fn test_analyze_dispatches_bulk() {
    let request = AnalysisRequest::Bulk {
        texts: vec!["a".to_string(), "b".to_string()],
    };
    let out = analyze(&constant(-0.3), &LabelThresholds::vader_v1(), &request).unwrap();
    match out {
        AnalysisOutput::Bulk(report) => {
            assert_eq!(report.total_analyzed, 2);
            assert_eq!(report.overall_sentiment, SentimentLabel::Negative);
        }
        AnalysisOutput::Single(_) => panic!("expected bulk report"),
    }
}

#[test]
fn test_error_messages_are_distinct() {
    let request = AnalysisRequest::Bulk { texts: Vec::new() };
    let err = analyze(&constant(0.0), &LabelThresholds::vader_v1(), &request).unwrap_err();
    assert!(err.to_string().starts_with("no input provided"));

    let failing = |_text: &str| -> Result<ScoreSet, ScoringError> {
        Err(ScoringError::MissingScore("compound"))
    };
    let request = AnalysisRequest::Single {
        text: "x".to_string(),
    };
    let err = analyze(&failing, &LabelThresholds::vader_v1(), &request).unwrap_err();
    assert!(err.to_string().starts_with("scoring failed:"));

    let err = CliError::from(input::parse_request("{}").unwrap_err());
    assert!(err.to_string().starts_with("invalid request:"));
}
