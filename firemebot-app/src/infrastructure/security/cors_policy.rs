use regex_lite::Regex;

const DEFAULT_ORIGIN_PATTERNS: &[&str] = &[
    r"^https://firemebot\.com$",
    r"^https://test\.natwerth\.com$",
    r"^https://natwerth\.github\.io$",
    r"^https?://localhost(?::\d+)?$",
];

pub const DEFAULT_FALLBACK_ORIGIN: &str = "https://firemebot.com";

/// What to answer when the request's `Origin` is not on the allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnmatchedOrigin {
    /// Echo a fixed production origin instead.
    Fallback(String),
    /// Send no `Access-Control-Allow-Origin` at all.
    Reject,
}

#[derive(Debug, Clone)]
pub struct CorsPolicy {
    patterns: Vec<Regex>,
    unmatched: UnmatchedOrigin,
}

impl CorsPolicy {
    /// Built-in allow-list plus `extra_origins`, each matched exactly.
    pub fn new(extra_origins: &[String], unmatched: UnmatchedOrigin) -> Self {
        let defaults = DEFAULT_ORIGIN_PATTERNS.iter().map(|p| p.to_string());
        let extras = extra_origins
            .iter()
            .map(|o| o.trim())
            .filter(|o| !o.is_empty())
            .map(|o| format!("^{}$", regex_lite::escape(o)));

        let patterns = defaults
            .chain(extras)
            .filter_map(|p| match Regex::new(&p) {
                Ok(re) => Some(re),
                Err(e) => {
                    tracing::warn!("Skipping invalid CORS origin pattern {}: {}", p, e);
                    None
                }
            })
            .collect();

        Self {
            patterns,
            unmatched,
        }
    }

    pub fn allow_origin(&self, origin: Option<&str>) -> Option<String> {
        let origin = origin.unwrap_or_default();
        if !origin.is_empty() && self.patterns.iter().any(|re| re.is_match(origin)) {
            return Some(origin.to_string());
        }

        match &self.unmatched {
            UnmatchedOrigin::Fallback(fallback) => Some(fallback.clone()),
            UnmatchedOrigin::Reject => None,
        }
    }
}

impl Default for CorsPolicy {
    fn default() -> Self {
        Self::new(
            &[],
            UnmatchedOrigin::Fallback(DEFAULT_FALLBACK_ORIGIN.to_string()),
        )
    }
}
