use super::prompt::{build_system_prompt, build_user_prompt};
use super::retry::RetryPolicy;
use super::types::{ResponsesRequest, ResponsesResponse, UpstreamResponse};
use crate::text::truncate_chars;
use firemebot_errors::AppError;
use serde_json::{Map, Value};

pub const OPENAI_API_URL: &str = "https://api.openai.com/v1/responses";
/// Pinned; the prompt's anchored scale is tuned against this snapshot.
pub const MODEL: &str = "gpt-5-nano-2025-08-07";

const DETAIL_LIMIT: usize = 2000;
const SAMPLE_LIMIT: usize = 1200;
const LOG_SAMPLE_LIMIT: usize = 600;

pub struct OpenAiClient {
    http_client: reqwest::Client,
    api_key: String,
    api_url: String,
    env: String,
    retry: RetryPolicy,
}

impl OpenAiClient {
    pub fn new(api_key: String, api_url: String, env: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_key,
            api_url,
            env,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Asks the model to roast `title` and returns the JSON object it produced.
    pub async fn generate_roast(
        &self,
        title: &str,
        fingerprint: String,
    ) -> Result<Map<String, Value>, AppError> {
        let request = ResponsesRequest::new(
            MODEL,
            build_system_prompt(),
            build_user_prompt(title),
            fingerprint,
            &self.env,
        );

        let response = self.call_upstream(&request).await;
        let req_id = response.request_id.clone();

        if !response.is_success() {
            let detail = match truncate_chars(&response.body, DETAIL_LIMIT) {
                d if d.is_empty() => response.status_text.clone(),
                d => d,
            };
            tracing::error!(
                status = response.status,
                attempts = response.attempts,
                req_id = ?req_id,
                "openai_upstream_error: {}",
                detail
            );
            return Err(AppError::OpenAiUpstream { req_id, detail });
        }

        let body: Value = serde_json::from_str(&response.body).map_err(|e| {
            AppError::WorkerException(format!("Upstream returned a non-JSON body: {}", e))
        })?;
        let data = ResponsesResponse::from_value(body);

        let Some(raw) = data.text() else {
            let status = data.status_or_unknown();
            let reason = data.incomplete_reason_or_unknown();
            tracing::error!(req_id = ?req_id, status = %status, reason = %reason, "openai_no_text");
            return Err(AppError::NoModelText {
                req_id,
                status,
                reason,
            });
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(roast)) => {
                tracing::debug!(req_id = ?req_id, attempts = response.attempts, "Roast generated");
                Ok(roast)
            }
            _ => {
                tracing::error!(
                    req_id = ?req_id,
                    "openai_bad_json: {}",
                    truncate_chars(&raw, LOG_SAMPLE_LIMIT)
                );
                Err(AppError::BadModelJson {
                    req_id,
                    sample: truncate_chars(&raw, SAMPLE_LIMIT),
                })
            }
        }
    }

    /// Posts `body` upstream, retrying transient failures with backoff.
    ///
    /// Never fails: network errors and timeouts surface as status `0`, and
    /// running out of attempts yields a synthetic `502`.
    pub async fn call_upstream(&self, body: &ResponsesRequest) -> UpstreamResponse {
        for attempt in 1..=self.retry.max_attempts {
            let mut response = self.attempt(body).await;
            response.attempts = attempt;

            if response.is_success() || !RetryPolicy::is_transient(response.status) {
                return response;
            }

            tracing::warn!(
                "OpenAI attempt {}/{} failed with status {} ({})",
                attempt,
                self.retry.max_attempts,
                response.status,
                response.status_text
            );

            if attempt < self.retry.max_attempts {
                let delay = self
                    .retry
                    .backoff_delay(attempt - 1, self.retry.sample_jitter());
                tokio::time::sleep(delay).await;
            }
        }

        UpstreamResponse::retries_exhausted(self.retry.max_attempts)
    }

    /// One bounded attempt. Dropping the in-flight future on timeout aborts
    /// the request and releases its connection.
    async fn attempt(&self, body: &ResponsesRequest) -> UpstreamResponse {
        let send = async {
            let response = self
                .http_client
                .post(&self.api_url)
                .bearer_auth(&self.api_key)
                .json(body)
                .send()
                .await?;

            let status = response.status();
            let request_id = response
                .headers()
                .get("x-request-id")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            let body = response.text().await?;

            Ok::<_, reqwest::Error>(UpstreamResponse {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body,
                request_id,
                attempts: 0,
            })
        };

        match tokio::time::timeout(self.retry.attempt_timeout, send).await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => UpstreamResponse::network_error(e.to_string()),
            Err(_) => UpstreamResponse::network_error(format!(
                "timed out after {}ms",
                self.retry.attempt_timeout.as_millis()
            )),
        }
    }
}
