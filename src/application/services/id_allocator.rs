//! Short identifier allocation with collision retry.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::json;
use uuid::Uuid;

use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Length of every allocated identifier.
pub const ID_LENGTH: usize = 5;

/// Produces short identifiers that are free in the backing store.
///
/// Candidates are drawn from a fresh UUID and checked for existence; on
/// collision the allocator draws again. The allocator does not reserve the
/// identifier it returns, so a concurrent registration can still claim it
/// between the existence check and the caller's insert; the store's duplicate
/// rejection covers that window.
pub struct IdAllocator {
    repository: Arc<dyn UrlRepository>,
    budget: Duration,
}

impl IdAllocator {
    pub fn new(repository: Arc<dyn UrlRepository>, budget: Duration) -> Self {
        Self { repository, budget }
    }

    /// Allocates an identifier not currently present in the store.
    ///
    /// The retry loop has no attempt cap; it is bounded by the configured
    /// time budget, checked between iterations so exhaustion surfaces
    /// promptly as [`AppError::Cancelled`]. Existence-check failures
    /// propagate immediately.
    pub async fn allocate(&self) -> Result<String, AppError> {
        let deadline = Instant::now() + self.budget;
        let mut attempt: u32 = 0;

        loop {
            if Instant::now() >= deadline {
                return Err(AppError::cancelled(
                    "Identifier allocation ran out of time",
                    json!({
                        "attempts": attempt,
                        "budget_ms": self.budget.as_millis() as u64,
                    }),
                ));
            }
            attempt += 1;

            let candidate = random_candidate();
            if !self.repository.exists(&candidate).await? {
                return Ok(candidate);
            }

            tracing::warn!(attempt, id = %candidate, "identifier collision, retrying");
            tokio::task::yield_now().await;
        }
    }
}

/// Draws a candidate from the leading characters of a random UUID.
fn random_candidate() -> String {
    let mut candidate = Uuid::new_v4().simple().to_string();
    candidate.truncate(ID_LENGTH);
    candidate
}
