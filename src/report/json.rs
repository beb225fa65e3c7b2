use crate::report::{AnalysisOutput, ReportError};

pub fn render_json(output: &AnalysisOutput, pretty: bool) -> Result<String, ReportError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(output)?
    } else {
        serde_json::to_string(output)?
    };
    Ok(rendered)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
