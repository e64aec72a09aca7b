//! Repository trait for short URL persistence operations.

use async_trait::async_trait;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::error::AppError;

/// Data access contract for short URL records.
///
/// Every storage backend implements exactly these six operations; all business
/// rules (deduplication, identifier allocation, counter updates) live above
/// this trait and treat it as the single synchronization point.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Looks up a record by its short identifier.
    async fn find_by_id(&self, id: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Looks up a record by the exact original URL string it was registered
    /// with. No normalization is applied on either side of the comparison.
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<ShortUrl>, AppError>;

    /// Returns whether a record with the given identifier exists.
    async fn exists(&self, id: &str) -> Result<bool, AppError>;

    /// Inserts a new record.
    ///
    /// Fails with [`AppError::AlreadyExists`] when the identifier is already
    /// taken, distinguishable from [`AppError::StoreUnavailable`] so callers
    /// can react to the collision specifically.
    async fn insert(&self, new_record: NewShortUrl) -> Result<ShortUrl, AppError>;

    /// Replaces the stored record that shares `record.id`.
    ///
    /// Fails with [`AppError::NotFound`] when no such record exists.
    async fn update(&self, record: ShortUrl) -> Result<ShortUrl, AppError>;

    /// Returns one page of records in listing order.
    ///
    /// Pages are 1-based; a page beyond the last record yields an empty
    /// vector rather than an error.
    async fn list_page(&self, page: u32, limit: u32) -> Result<Vec<ShortUrl>, AppError>;
}
