use std::io::Read;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Argument value that makes the request document come from stdin.
pub const STDIN_MARKER: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisRequest {
    Single { text: String },
    Bulk { texts: Vec<String> },
}

impl AnalysisRequest {
    pub fn text_count(&self) -> usize {
        match self {
            AnalysisRequest::Single { .. } => 1,
            AnalysisRequest::Bulk { texts } => texts.len(),
        }
    }
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read request from stdin: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed request: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("request must be a JSON object, got {0}")]
    NotObject(&'static str),
    #[error("request has neither a \"text\" nor a \"texts\" field")]
    MissingField,
}

#[derive(Debug, Deserialize)]
struct RawRequest {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    texts: Option<Vec<String>>,
}

pub fn parse_request(doc: &str) -> Result<AnalysisRequest, InputError> {
    let value: Value = serde_json::from_str(doc)?;
    if !value.is_object() {
        return Err(InputError::NotObject(json_kind(&value)));
    }
    let raw: RawRequest = serde_json::from_value(value)?;
    match (raw.texts, raw.text) {
        (Some(texts), _) => Ok(AnalysisRequest::Bulk { texts }),
        (None, Some(text)) => Ok(AnalysisRequest::Single { text }),
        (None, None) => Err(InputError::MissingField),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

pub fn read_request_arg(arg: &str) -> Result<AnalysisRequest, InputError> {
    if arg == STDIN_MARKER {
        let mut doc = String::new();
        std::io::stdin().read_to_string(&mut doc)?;
        return parse_request(&doc);
    }
    parse_request(arg)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
