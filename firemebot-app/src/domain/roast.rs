use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Successful response body of `POST /api/roast`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoastEnvelope {
    pub roast: Map<String, Value>,
    pub title: String,
}

impl RoastEnvelope {
    pub fn new(roast: Map<String, Value>, title: String) -> Self {
        Self { roast, title }
    }
}

/// The roast as the client displays it. Every field is always populated,
/// missing data degrades to an empty value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoastResult {
    pub title: String,
    pub score: Option<f64>,
    pub body: String,
    pub post: String,
    pub tip: Vec<String>,
}

impl RoastResult {
    /// Score clamped to the 0..=100 meter; a missing score reads as 0.
    pub fn score_percent(&self) -> u8 {
        self.score.map(|s| s.round().clamp(0.0, 100.0) as u8).unwrap_or(0)
    }
}

/// Coerces whatever the API returned into a [`RoastResult`].
///
/// Accepts both the `{ roast: {...}, title }` envelope and a bare roast
/// object, and understands the older field names (`risk`, `analysis`,
/// `message`, `headline`, `tips`). Never fails.
pub fn normalize(payload: &Value) -> RoastResult {
    let base = match payload.get("roast") {
        Some(roast) if !roast.is_null() => roast,
        _ => payload,
    };

    let Some(fields) = base.as_object() else {
        return RoastResult::default();
    };

    RoastResult {
        title: string_field(fields, &["title"]).unwrap_or_default(),
        score: first_present(fields, &["score", "risk"]).and_then(coerce_score),
        body: string_field(fields, &["body", "analysis", "message"])
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
        post: string_field(fields, &["post", "headline"])
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
        tip: first_present(fields, &["tip", "tips"])
            .map(coerce_tips)
            .unwrap_or_default(),
    }
}

fn first_present<'a>(fields: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|k| fields.get(*k))
        .find(|v| !v.is_null())
}

fn string_field(fields: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    first_present(fields, keys)
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn coerce_score(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

/// Tips from an array or a comma-separated string. Array entries that are
/// `null`, objects, or nested arrays are dropped rather than stringified.
fn coerce_tips(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.trim().to_string()),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                _ => None,
            })
            .filter(|s| !s.is_empty())
            .collect(),
        Value::String(s) => s
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}
