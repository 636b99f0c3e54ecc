use serde::{Deserialize, Serialize};
use serde_json::Value;

const METADATA_APP: &str = "firemebot";
const METADATA_VERSION: &str = "2025-08-25";

#[derive(Debug, Serialize)]
pub struct ResponsesRequest {
    pub model: String,
    pub store: bool,
    pub user: String,
    pub input: Vec<Message>,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub reasoning: Reasoning,
    pub text: TextOptions,
    pub metadata: Metadata,
}

#[derive(Debug, Serialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct Reasoning {
    pub effort: String,
}

#[derive(Debug, Serialize)]
pub struct TextOptions {
    pub format: TextFormat,
}

#[derive(Debug, Serialize)]
pub struct TextFormat {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Serialize)]
pub struct Metadata {
    pub app: String,
    pub env: String,
    pub version: String,
}

impl ResponsesRequest {
    pub fn new(model: &str, system: String, user_prompt: String, user: String, env: &str) -> Self {
        Self {
            model: model.to_string(),
            store: false,
            user,
            input: vec![
                Message {
                    role: "system".to_string(),
                    content: system,
                },
                Message {
                    role: "user".to_string(),
                    content: user_prompt,
                },
            ],
            temperature: 1.0,
            max_output_tokens: 2048,
            reasoning: Reasoning {
                effort: "low".to_string(),
            },
            text: TextOptions {
                format: TextFormat {
                    kind: "json_object".to_string(),
                },
            },
            metadata: Metadata {
                app: METADATA_APP.to_string(),
                env: env.to_string(),
                version: METADATA_VERSION.to_string(),
            },
        }
    }
}

/// Responses API reply. Fields stay raw JSON so an oddly shaped reply still
/// yields its status and reason instead of failing to decode.
#[derive(Debug, Default, Deserialize)]
pub struct ResponsesResponse {
    #[serde(default)]
    pub output_text: Option<Value>,
    #[serde(default)]
    pub output: Option<Value>,
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default)]
    pub incomplete_details: Option<Value>,
}

impl ResponsesResponse {
    /// Reads a decoded upstream body. Anything but an object reads as empty.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// The model's output text: `output_text` when set, otherwise every
    /// string `text` of `output[].content[]` stitched together.
    pub fn text(&self) -> Option<String> {
        if let Some(text) = self
            .output_text
            .as_ref()
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
        {
            return Some(text.to_string());
        }

        let stitched = self
            .output
            .as_ref()
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(|item| item.get("content").and_then(Value::as_array))
            .flatten()
            .filter_map(|part| part.get("text").and_then(Value::as_str))
            .collect::<String>();

        let stitched = stitched.trim();
        (!stitched.is_empty()).then(|| stitched.to_string())
    }

    pub fn status_or_unknown(&self) -> String {
        self.status
            .as_ref()
            .and_then(Value::as_str)
            .unwrap_or("?")
            .to_string()
    }

    pub fn incomplete_reason_or_unknown(&self) -> String {
        self.incomplete_details
            .as_ref()
            .and_then(|d| d.get("reason"))
            .and_then(Value::as_str)
            .unwrap_or("?")
            .to_string()
    }
}

/// Raw outcome of one upstream call, after retries.
///
/// `status` is `0` when the last attempt never produced an HTTP response
/// (connection failure or timeout).
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
    pub request_id: Option<String>,
    pub attempts: u32,
}

impl UpstreamResponse {
    pub fn network_error(cause: String) -> Self {
        Self {
            status: 0,
            status_text: "network_error".to_string(),
            body: cause,
            request_id: None,
            attempts: 0,
        }
    }

    pub fn retries_exhausted(attempts: u32) -> Self {
        Self {
            status: 502,
            status_text: "Bad Gateway".to_string(),
            body: "openai_retries_exhausted".to_string(),
            request_id: None,
            attempts,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
