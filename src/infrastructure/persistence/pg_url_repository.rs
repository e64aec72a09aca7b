//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

use super::UrlRow;
use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::UrlRepository;
use crate::error::{map_sqlx_error, AppError};

/// PostgreSQL repository for short URL storage.
///
/// The `urls` table keeps the identifier as its primary key; that constraint
/// is what turns a concurrent double-insert into a distinguishable duplicate
/// error. `original_url` is indexed but not unique, deduplication happens
/// above this layer.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Connects to the database and bootstraps the schema.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS urls (
                id           TEXT PRIMARY KEY,
                original_url TEXT NOT NULL,
                click_count  BIGINT NOT NULL DEFAULT 0,
                created_date TIMESTAMPTZ NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_urls_original_url ON urls (original_url)")
            .execute(&pool)
            .await?;

        Ok(Self::new(Arc::new(pool)))
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            "SELECT id, original_url, click_count, created_date FROM urls WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(ShortUrl::from))
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, original_url, click_count, created_date FROM urls
            WHERE original_url = $1
            ORDER BY created_date, id
            LIMIT 1
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(ShortUrl::from))
    }

    async fn exists(&self, id: &str) -> Result<bool, AppError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM urls WHERE id = $1)")
                .bind(id)
                .fetch_one(self.pool.as_ref())
                .await
                .map_err(map_sqlx_error)?;

        Ok(exists)
    }

    async fn insert(&self, new_record: NewShortUrl) -> Result<ShortUrl, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            INSERT INTO urls (id, original_url, click_count, created_date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, original_url, click_count, created_date
            "#,
        )
        .bind(&new_record.id)
        .bind(&new_record.original_url)
        .bind(new_record.click_count as i64)
        .bind(new_record.created_date)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.into())
    }

    async fn update(&self, record: ShortUrl) -> Result<ShortUrl, AppError> {
        // Only the click counter is mutable once a record exists.
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            UPDATE urls SET click_count = $1
            WHERE id = $2
            RETURNING id, original_url, click_count, created_date
            "#,
        )
        .bind(record.click_count as i64)
        .bind(&record.id)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        row.map(ShortUrl::from)
            .ok_or_else(|| AppError::not_found("Short URL not found", json!({ "id": record.id })))
    }

    async fn list_page(&self, page: u32, limit: u32) -> Result<Vec<ShortUrl>, AppError> {
        let offset = (i64::from(page.max(1)) - 1) * i64::from(limit);

        let rows = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, original_url, click_count, created_date FROM urls
            ORDER BY created_date, id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(i64::from(limit))
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(ShortUrl::from).collect())
    }
}
