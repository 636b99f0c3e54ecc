mod lenient_json;
mod roast_api;
mod submit_guard;

pub use lenient_json::parse_lenient;
pub use roast_api::RoastApiClient;
pub use submit_guard::{RoastSession, SubmitGuard};
