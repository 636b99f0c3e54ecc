use serde::{Deserialize, Serialize};

/// Wire-level error codes returned in the `error` field of every failure body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    #[serde(rename = "MISSING_TITLE")]
    MissingTitle,
    #[serde(rename = "OPENAI_UPSTREAM")]
    OpenAiUpstream,
    #[serde(rename = "NO_MODEL_TEXT")]
    NoModelText,
    #[serde(rename = "BAD_MODEL_JSON")]
    BadModelJson,
    #[serde(rename = "WORKER_EXCEPTION")]
    WorkerException,
}

/// JSON body of every failed request: `{ "error": CODE, "status": 400, ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorCode,
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(rename = "reqId", default, skip_serializing_if = "Option::is_none")]
    pub req_id: Option<String>,
    #[serde(rename = "upstreamStatus", default, skip_serializing_if = "Option::is_none")]
    pub upstream_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample: Option<String>,
}

impl ErrorEnvelope {
    fn new(error: ErrorCode, status: u16) -> Self {
        Self {
            error,
            status,
            detail: None,
            req_id: None,
            upstream_status: None,
            reason: None,
            sample: None,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Missing title: {0}")]
    MissingTitle(String),

    #[error("OpenAI upstream error: {detail}")]
    OpenAiUpstream {
        req_id: Option<String>,
        detail: String,
    },

    #[error("Model returned no text (status {status}, reason {reason})")]
    NoModelText {
        req_id: Option<String>,
        status: String,
        reason: String,
    },

    #[error("Model returned invalid JSON")]
    BadModelJson {
        req_id: Option<String>,
        sample: String,
    },

    #[error("Internal error: {0}")]
    WorkerException(String),
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidInput(_) => ErrorCode::InvalidInput,
            Self::MissingTitle(_) => ErrorCode::MissingTitle,
            Self::OpenAiUpstream { .. } => ErrorCode::OpenAiUpstream,
            Self::NoModelText { .. } => ErrorCode::NoModelText,
            Self::BadModelJson { .. } => ErrorCode::BadModelJson,
            Self::WorkerException(_) => ErrorCode::WorkerException,
        }
    }

    pub fn status(&self) -> u16 {
        match self {
            Self::InvalidInput(_) | Self::MissingTitle(_) => 400,
            Self::OpenAiUpstream { .. } | Self::NoModelText { .. } | Self::BadModelJson { .. } => {
                502
            }
            Self::WorkerException(_) => 500,
        }
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        let mut envelope = ErrorEnvelope::new(self.code(), self.status());
        match self {
            Self::InvalidInput(detail)
            | Self::MissingTitle(detail)
            | Self::WorkerException(detail) => {
                envelope.detail = Some(detail.clone());
            }
            Self::OpenAiUpstream { req_id, detail } => {
                envelope.req_id = req_id.clone();
                envelope.detail = Some(detail.clone());
            }
            Self::NoModelText {
                req_id,
                status,
                reason,
            } => {
                envelope.req_id = req_id.clone();
                envelope.upstream_status = Some(status.clone());
                envelope.reason = Some(reason.clone());
            }
            Self::BadModelJson { req_id, sample } => {
                envelope.req_id = req_id.clone();
                envelope.sample = Some(sample.clone());
            }
        }
        envelope
    }
}

#[cfg(feature = "server")]
mod server_impl {
    use super::AppError;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::Json;

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status =
                StatusCode::from_u16(self.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(self.envelope())).into_response()
        }
    }
}
