use crate::ErrorEnvelope;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ClientError {
    #[error("Enter a job title.")]
    EmptyTitle,

    #[error("A roast is already being drafted")]
    Busy,

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status} {status_text}: {body}")]
    Http {
        status: u16,
        status_text: String,
        body: String,
    },

    #[error("Unexpected response from API")]
    UnexpectedResponse(String),
}

impl ClientError {
    /// Technical detail shown under the error message, when there is any.
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Http { body, .. } if !body.is_empty() => Some(body.clone()),
            Self::UnexpectedResponse(sample) if !sample.is_empty() => Some(sample.clone()),
            Self::Network(cause) => Some(cause.clone()),
            _ => None,
        }
    }

    /// Structured server error, when the failed response carried one.
    pub fn envelope(&self) -> Option<ErrorEnvelope> {
        match self {
            Self::Http { body, .. } => serde_json::from_str(body).ok(),
            _ => None,
        }
    }
}
