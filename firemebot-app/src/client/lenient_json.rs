use crate::text::truncate_chars;
use firemebot_errors::ClientError;
use regex_lite::Regex;
use serde_json::Value;
use std::sync::LazyLock;

const SAMPLE_LIMIT: usize = 500;

// Greedy on purpose: first `{` through last `}`.
static OBJECT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("object block pattern is valid"));

/// Strict JSON parse, then a salvage pass over the outermost `{...}` block.
///
/// The model is not guaranteed to emit bare JSON; replies wrapped in code
/// fences or prose are recovered here.
pub fn parse_lenient(text: &str) -> Result<Value, ClientError> {
    if let Ok(value) = serde_json::from_str(text) {
        return Ok(value);
    }

    OBJECT_BLOCK
        .find(text)
        .and_then(|m| serde_json::from_str(m.as_str()).ok())
        .ok_or_else(|| ClientError::UnexpectedResponse(truncate_chars(text, SAMPLE_LIMIT)))
}
