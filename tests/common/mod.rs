#![allow(dead_code)]

use chrono::{DateTime, Utc};
use curtail::domain::entities::NewShortUrl;
use curtail::domain::repositories::UrlRepository;
use curtail::infrastructure::persistence::MemoryUrlRepository;
use curtail::state::AppState;
use std::sync::Arc;
use std::time::Duration;

pub const TEST_BASE_URL: &str = "http://short.test";

/// Builds an application state over a fresh in-memory store.
///
/// The repository handle is returned alongside the state so tests can seed
/// records or inspect what the handlers wrote.
pub fn create_test_state() -> (AppState, Arc<dyn UrlRepository>) {
    let repository: Arc<dyn UrlRepository> = Arc::new(MemoryUrlRepository::new());

    let state = AppState::new(
        repository.clone(),
        TEST_BASE_URL.to_string(),
        Duration::from_millis(500),
    );

    (state, repository)
}

pub async fn seed_record(repository: &Arc<dyn UrlRepository>, id: &str, url: &str) {
    seed_record_at(repository, id, url, 0, Utc::now()).await;
}

pub async fn seed_record_at(
    repository: &Arc<dyn UrlRepository>,
    id: &str,
    url: &str,
    click_count: u64,
    created_date: DateTime<Utc>,
) {
    repository
        .insert(NewShortUrl {
            id: id.to_string(),
            original_url: url.to_string(),
            click_count,
            created_date,
        })
        .await
        .unwrap();
}
