use crate::model::labels::label_order;
use crate::model::{BulkReport, ScoreSet, SentimentResult};
use crate::report::{AnalysisOutput, format_f64_3, format_f64_4};

pub fn render_report_text(output: &AnalysisOutput) -> String {
    match output {
        AnalysisOutput::Single(result) => render_single(result),
        AnalysisOutput::Bulk(report) => render_bulk(report),
    }
}

fn render_single(result: &SentimentResult) -> String {
    let mut out = String::new();
    out.push_str("Sentiment Report\n");
    out.push_str("================\n\n");
    out.push_str(&format!("Sentiment: {}\n", result.sentiment));
    out.push_str(&format!(
        "Confidence: {}\n",
        format_f64_4(result.confidence)
    ));
    push_scores(&mut out, &result.scores, format_f64_4);
    out
}

fn render_bulk(report: &BulkReport) -> String {
    let mut out = String::new();
    out.push_str("Bulk Sentiment Report\n");
    out.push_str("=====================\n\n");

    out.push_str("1. Overall\n");
    out.push_str(&format!("Overall sentiment: {}\n", report.overall_sentiment));
    out.push_str(&format!("Texts analyzed: {}\n", report.total_analyzed));
    push_scores(&mut out, &report.average_scores, format_f64_3);
    out.push('\n');

    out.push_str("2. Distribution\n");
    let pct = report.sentiment_distribution.percentages();
    for (label, share) in label_order().iter().zip(pct) {
        out.push_str(&format!(
            "{:<9} {:>5} ({}%)\n",
            label.as_str(),
            report.sentiment_distribution.count(*label),
            share
        ));
    }
    out.push('\n');

    out.push_str("3. Items\n");
    for (i, item) in report.individual_results.iter().enumerate() {
        out.push_str(&format!(
            "#{:<4} {:<9} compound={}\n",
            i + 1,
            item.sentiment.as_str(),
            format_f64_4(item.scores.compound)
        ));
    }
    out
}

fn push_scores(out: &mut String, scores: &ScoreSet, fmt: fn(f64) -> String) {
    out.push_str(&format!("Compound: {}\n", fmt(scores.compound)));
    out.push_str(&format!("Positive: {}\n", fmt(scores.positive)));
    out.push_str(&format!("Negative: {}\n", fmt(scores.negative)));
    out.push_str(&format!("Neutral: {}\n", fmt(scores.neutral)));
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
