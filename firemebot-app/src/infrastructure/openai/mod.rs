mod client;
mod prompt;
mod retry;
mod types;

pub use client::{OpenAiClient, MODEL, OPENAI_API_URL};
pub use prompt::{build_system_prompt, build_user_prompt};
pub use retry::RetryPolicy;
pub use types::{ResponsesRequest, ResponsesResponse, UpstreamResponse};
