mod roast;
mod roast_request;

pub use roast::{normalize, RoastEnvelope, RoastResult};
pub use roast_request::{RoastRequest, MAX_TITLE_CHARS};
