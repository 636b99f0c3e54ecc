use crate::domain::{RoastRequest, MAX_TITLE_CHARS};
use firemebot_errors::AppError;
use serde_json::Value;

pub struct InputSanitizer;

impl InputSanitizer {
    /// Lenient body parse: anything that isn't JSON is treated as `null`.
    pub fn parse_body(raw: &[u8]) -> Value {
        serde_json::from_slice(raw).unwrap_or(Value::Null)
    }

    pub fn validate_title(body: &Value) -> Result<RoastRequest, AppError> {
        let title = match body.get("title") {
            None | Some(Value::Null) => "",
            Some(Value::String(s)) => s.as_str(),
            Some(_) => {
                return Err(AppError::InvalidInput(
                    "Field 'title' must be a string.".to_string(),
                ))
            }
        };

        let title: String = title.trim().chars().take(MAX_TITLE_CHARS).collect();

        if title.is_empty() {
            return Err(AppError::MissingTitle(
                "Provide a non-empty 'title'.".to_string(),
            ));
        }

        Ok(RoastRequest::new(title))
    }
}
