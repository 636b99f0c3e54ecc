use rand::Rng;
use std::time::Duration;

const MAX_ATTEMPTS: u32 = 3;
const BASE_DELAY: Duration = Duration::from_millis(300);
const MAX_JITTER: Duration = Duration::from_millis(150);
const ATTEMPT_TIMEOUT: Duration = Duration::from_secs(25);

/// Bounded exponential backoff with jitter for upstream calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_jitter: Duration,
    pub attempt_timeout: Duration,
}

impl RetryPolicy {
    /// 429, any 5xx, and the synthetic `0` (network failure or timeout).
    pub fn is_transient(status: u16) -> bool {
        status == 0 || status == 429 || (500..=599).contains(&status)
    }

    /// Sleep before retry number `retry` (0-based): `base * 2^retry + jitter`.
    pub fn backoff_delay(&self, retry: u32, jitter: Duration) -> Duration {
        self.base_delay.saturating_mul(1u32 << retry.min(16)) + jitter
    }

    pub fn sample_jitter(&self) -> Duration {
        let max_ms = self.max_jitter.as_millis() as u64;
        if max_ms == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(rand::thread_rng().gen_range(0..=max_ms))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            base_delay: BASE_DELAY,
            max_jitter: MAX_JITTER,
            attempt_timeout: ATTEMPT_TIMEOUT,
        }
    }
}
