use crate::application::GenerateRoast;
use crate::config::AppConfig;
use crate::infrastructure::openai::{OpenAiClient, RetryPolicy};
use crate::infrastructure::security::{CorsPolicy, Fingerprinter};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub generate_roast: Arc<GenerateRoast>,
    pub cors_policy: Arc<CorsPolicy>,
}

impl AppContext {
    pub fn new(config: &AppConfig, retry: RetryPolicy) -> Self {
        let openai = OpenAiClient::new(
            config.openai_api_key.clone(),
            config.openai_api_url.clone(),
            config.app_env.clone(),
        )
        .with_retry_policy(retry);

        Self {
            generate_roast: Arc::new(GenerateRoast::new(
                openai,
                Fingerprinter::new(config.hash_salt.clone()),
            )),
            cors_policy: Arc::new(config.cors_policy()),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        tracing::info!("Using OpenAI Responses API at {}", config.openai_api_url);
        Self::new(config, RetryPolicy::default())
    }
}
