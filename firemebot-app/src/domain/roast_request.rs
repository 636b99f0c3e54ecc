use serde::{Deserialize, Serialize};

pub const MAX_TITLE_CHARS: usize = 140;

/// A job title that already passed validation: trimmed, non-empty, at most
/// [`MAX_TITLE_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoastRequest {
    pub title: String,
}

impl RoastRequest {
    pub fn new(title: String) -> Self {
        Self { title }
    }
}
