use super::roast_api::RoastApiClient;
use crate::domain::RoastResult;
use firemebot_errors::ClientError;
use std::sync::atomic::{AtomicBool, Ordering};

/// Holds the submit control disabled for as long as it lives.
///
/// Dropping it re-enables submission on every exit path: success, error,
/// panic, or the owning future being cancelled.
pub struct SubmitGuard<'a> {
    in_flight: &'a AtomicBool,
}

impl<'a> SubmitGuard<'a> {
    pub fn acquire(in_flight: &'a AtomicBool) -> Option<Self> {
        in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { in_flight })
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.in_flight.store(false, Ordering::Release);
    }
}

/// One user's form: at most one roast in flight at a time.
pub struct RoastSession {
    client: RoastApiClient,
    in_flight: AtomicBool,
}

impl RoastSession {
    pub fn new(client: RoastApiClient) -> Self {
        Self {
            client,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub async fn submit(&self, title: &str) -> Result<RoastResult, ClientError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ClientError::EmptyTitle);
        }

        let _guard = SubmitGuard::acquire(&self.in_flight).ok_or(ClientError::Busy)?;
        self.client.fetch_normalized(title).await
    }
}
