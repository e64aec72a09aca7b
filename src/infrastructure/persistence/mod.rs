//! Storage backend implementations.
//!
//! Concrete implementations of the [`UrlRepository`] trait plus the factory
//! that selects one at startup. SQL backends use SQLx prepared statements;
//! the in-memory backend is a concurrent map meant for tests and throwaway
//! deployments.
//!
//! # Backends
//!
//! - [`PgUrlRepository`] - PostgreSQL
//! - [`SqliteUrlRepository`] - SQLite (file or in-memory database)
//! - [`MemoryUrlRepository`] - process-local concurrent map

pub mod memory_url_repository;
pub mod pg_url_repository;
pub mod sqlite_url_repository;

pub use memory_url_repository::MemoryUrlRepository;
pub use pg_url_repository::PgUrlRepository;
pub use sqlite_url_repository::SqliteUrlRepository;

use std::sync::Arc;

use anyhow::Context;
use chrono::{DateTime, Utc};

use crate::config::{Config, StorageBackend};
use crate::domain::entities::ShortUrl;
use crate::domain::repositories::UrlRepository;

/// Row shape shared by the SQL backends.
#[derive(Debug, sqlx::FromRow)]
struct UrlRow {
    id: String,
    original_url: String,
    click_count: i64,
    created_date: DateTime<Utc>,
}

impl From<UrlRow> for ShortUrl {
    fn from(row: UrlRow) -> Self {
        ShortUrl::new(
            row.id,
            row.original_url,
            row.click_count.max(0) as u64,
            row.created_date,
        )
    }
}

/// Builds the repository selected by `STORAGE_BACKEND`.
///
/// SQL backends connect and bootstrap their schema here, so a misconfigured
/// database fails startup instead of the first request.
pub async fn build_repository(config: &Config) -> anyhow::Result<Arc<dyn UrlRepository>> {
    let repository: Arc<dyn UrlRepository> = match config.backend {
        StorageBackend::Postgres => {
            let repo =
                PgUrlRepository::connect(&config.database_url, config.db_max_connections)
                    .await
                    .context("Failed to connect to PostgreSQL")?;
            Arc::new(repo)
        }
        StorageBackend::Sqlite => {
            let repo =
                SqliteUrlRepository::connect(&config.database_url, config.db_max_connections)
                    .await
                    .context("Failed to open SQLite database")?;
            Arc::new(repo)
        }
        StorageBackend::Memory => Arc::new(MemoryUrlRepository::new()),
    };

    Ok(repository)
}
