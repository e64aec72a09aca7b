//! Identifier resolution with click tracking.

use std::sync::Arc;

use serde_json::json;

use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::url_scheme::ensure_scheme;

/// Service for resolving short identifiers to destination URLs.
pub struct ResolutionService {
    repository: Arc<dyn UrlRepository>,
}

impl ResolutionService {
    /// Creates a new resolution service.
    pub fn new(repository: Arc<dyn UrlRepository>) -> Self {
        Self { repository }
    }

    /// Resolves an identifier to its destination URL, counting the visit.
    ///
    /// The click counter is incremented in memory and written back as a plain
    /// update, so two concurrent resolutions of the same identifier can lose
    /// one increment (last writer wins). The returned URL is scheme-prefixed
    /// for redirecting; the stored record keeps the URL exactly as submitted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown identifier and any store
    /// failure verbatim. Neither the lookup nor the update is retried.
    pub async fn resolve(&self, id: &str) -> Result<String, AppError> {
        let mut record = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Short URL not found", json!({ "id": id })))?;

        record.click_count += 1;
        let updated = self.repository.update(record).await?;

        Ok(ensure_scheme(&updated.original_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ShortUrl;
    use crate::domain::repositories::MockUrlRepository;
    use chrono::Utc;

    fn test_record(id: &str, url: &str, click_count: u64) -> ShortUrl {
        ShortUrl::new(id.to_string(), url.to_string(), click_count, Utc::now())
    }

    fn service_with(mock: MockUrlRepository) -> ResolutionService {
        ResolutionService::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn test_resolve_increments_click_count() {
        let mut mock_repo = MockUrlRepository::new();

        let stored = test_record("ab1c2", "https://example.com", 4);
        mock_repo
            .expect_find_by_id()
            .withf(|id| id == "ab1c2")
            .times(1)
            .returning(move |_| Ok(Some(stored.clone())));

        mock_repo
            .expect_update()
            .withf(|record| record.id == "ab1c2" && record.click_count == 5)
            .times(1)
            .returning(|record| Ok(record));

        let service = service_with(mock_repo);

        let result = service.resolve("ab1c2").await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "https://example.com");
    }

    #[tokio::test]
    async fn test_resolve_prefixes_scheme_without_persisting_it() {
        let mut mock_repo = MockUrlRepository::new();

        let stored = test_record("ab1c2", "example.com", 0);
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(stored.clone())));

        // The update carries the URL as submitted; only the returned value
        // gains a scheme.
        mock_repo
            .expect_update()
            .withf(|record| record.original_url == "example.com")
            .times(1)
            .returning(|record| Ok(record));

        let service = service_with(mock_repo);

        let result = service.resolve("ab1c2").await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "https://example.com");
    }

    #[tokio::test]
    async fn test_resolve_keeps_http_scheme() {
        let mut mock_repo = MockUrlRepository::new();

        let stored = test_record("ab1c2", "http://example.com", 0);
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(stored.clone())));

        mock_repo
            .expect_update()
            .times(1)
            .returning(|record| Ok(record));

        let service = service_with(mock_repo);

        let result = service.resolve("ab1c2").await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "http://example.com");
    }

    #[tokio::test]
    async fn test_resolve_unknown_id_is_not_found() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        mock_repo.expect_update().times(0);

        let service = service_with(mock_repo);

        let result = service.resolve("doesnotexist").await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolve_propagates_update_failure() {
        let mut mock_repo = MockUrlRepository::new();

        let stored = test_record("ab1c2", "https://example.com", 0);
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(stored.clone())));

        mock_repo
            .expect_update()
            .times(1)
            .returning(|_| Err(AppError::store_unavailable("Database error", json!({}))));

        let service = service_with(mock_repo);

        let result = service.resolve("ab1c2").await;

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            AppError::StoreUnavailable { .. }
        ));
    }
}
