use super::lenient_json::parse_lenient;
use crate::config::ClientConfig;
use crate::domain::{normalize, RoastResult};
use crate::text::truncate_chars;
use firemebot_errors::ClientError;
use serde_json::{json, Value};

const BODY_PREVIEW_LIMIT: usize = 500;

/// Caller side of `POST /api/roast`. One request per call, no retries.
#[derive(Clone)]
pub struct RoastApiClient {
    http_client: reqwest::Client,
    config: ClientConfig,
}

impl RoastApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            config,
        }
    }

    /// Raw JSON payload returned for `title`.
    pub async fn fetch_roast(&self, title: &str) -> Result<Value, ClientError> {
        let response = self
            .http_client
            .post(self.config.endpoint.clone())
            .json(&json!({ "title": title }))
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !status.is_success() {
            tracing::warn!("Roast API returned {}", status);
            return Err(ClientError::Http {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body: truncate_chars(&text, BODY_PREVIEW_LIMIT),
            });
        }

        parse_lenient(&text)
    }

    pub async fn fetch_normalized(&self, title: &str) -> Result<RoastResult, ClientError> {
        let payload = self.fetch_roast(title).await?;
        Ok(normalize(&payload))
    }
}
