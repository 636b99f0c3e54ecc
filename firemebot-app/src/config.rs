use crate::infrastructure::openai::OPENAI_API_URL;
use crate::infrastructure::security::{CorsPolicy, UnmatchedOrigin, DEFAULT_FALLBACK_ORIGIN};
use url::Url;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8787";
const DEFAULT_APP_ENV: &str = "prod";
const DEFAULT_API_URL: &str = "http://localhost:8787/api/roast";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Server configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: String,
    pub openai_api_url: String,
    pub hash_salt: String,
    pub bind_addr: String,
    pub app_env: String,
    pub cors_allowed_origins: Vec<String>,
    pub cors_unmatched: UnmatchedOrigin,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let openai_api_key = get("OPENAI_API_KEY").ok_or(ConfigError::Missing("OPENAI_API_KEY"))?;

        let fallback = get("CORS_FALLBACK_ORIGIN").unwrap_or_else(|| DEFAULT_FALLBACK_ORIGIN.to_string());
        let cors_unmatched = match get("CORS_UNMATCHED_ORIGIN").as_deref() {
            None | Some("fallback") => UnmatchedOrigin::Fallback(fallback),
            Some("reject") => UnmatchedOrigin::Reject,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "CORS_UNMATCHED_ORIGIN",
                    value: other.to_string(),
                })
            }
        };

        let cors_allowed_origins: Vec<String> = get("CORS_ALLOWED_ORIGINS")
            .map(|list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            openai_api_key,
            openai_api_url: get("OPENAI_API_URL").unwrap_or_else(|| OPENAI_API_URL.to_string()),
            hash_salt: lookup("HASH_SALT").unwrap_or_default(),
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            app_env: get("APP_ENV").unwrap_or_else(|| DEFAULT_APP_ENV.to_string()),
            cors_allowed_origins,
            cors_unmatched,
        })
    }

    pub fn cors_policy(&self) -> CorsPolicy {
        CorsPolicy::new(&self.cors_allowed_origins, self.cors_unmatched.clone())
    }
}

/// Where the client request layer sends roasts. Resolved once and passed
/// explicitly to [`crate::client::RoastApiClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: Url,
}

impl ClientConfig {
    pub fn new(endpoint: Url) -> Self {
        Self { endpoint }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw = lookup("FIREMEBOT_API_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let endpoint = Url::parse(&raw).map_err(|_| ConfigError::Invalid {
            key: "FIREMEBOT_API_URL",
            value: raw.clone(),
        })?;

        Ok(Self { endpoint })
    }
}
