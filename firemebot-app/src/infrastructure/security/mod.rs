mod cors_policy;
mod fingerprint;
mod input_sanitizer;

pub use cors_policy::{CorsPolicy, UnmatchedOrigin, DEFAULT_FALLBACK_ORIGIN};
pub use fingerprint::Fingerprinter;
pub use input_sanitizer::InputSanitizer;
