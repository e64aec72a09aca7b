//! Paginated record listing.

use std::sync::Arc;

use crate::domain::entities::ShortUrl;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Service for enumerating registered short URLs page by page.
pub struct ListingService {
    repository: Arc<dyn UrlRepository>,
}

impl ListingService {
    /// Creates a new listing service.
    pub fn new(repository: Arc<dyn UrlRepository>) -> Self {
        Self { repository }
    }

    /// Returns one page of records in stable order.
    ///
    /// Pages are 1-based. A page beyond the last record is an empty vector,
    /// not an error.
    pub async fn list(&self, page: u32, limit: u32) -> Result<Vec<ShortUrl>, AppError> {
        self.repository.list_page(page, limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRepository;
    use chrono::Utc;

    #[tokio::test]
    async fn test_list_passes_page_and_limit_through() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_list_page()
            .withf(|page, limit| *page == 2 && *limit == 20)
            .times(1)
            .returning(|_, _| {
                Ok(vec![ShortUrl::new(
                    "ab1c2".to_string(),
                    "https://example.com".to_string(),
                    0,
                    Utc::now(),
                )])
            });

        let service = ListingService::new(Arc::new(mock_repo));

        let result = service.list(2, 20).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_beyond_last_page_is_empty() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_list_page()
            .times(1)
            .returning(|_, _| Ok(Vec::new()));

        let service = ListingService::new(Arc::new(mock_repo));

        let result = service.list(99, 20).await;

        assert!(result.is_ok());
        assert!(result.unwrap().is_empty());
    }
}
