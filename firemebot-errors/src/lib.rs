mod app_error;
mod client_error;

pub use app_error::{AppError, ErrorCode, ErrorEnvelope};
pub use client_error::ClientError;
