//! Idempotent short URL registration.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use crate::application::services::id_allocator::IdAllocator;
use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Service for registering URLs under short identifiers.
///
/// Registration is idempotent per URL: submitting the same original URL again
/// returns the record created the first time, with whatever click count it has
/// accumulated since, and performs no insert.
pub struct RegistrationService {
    repository: Arc<dyn UrlRepository>,
    allocator: IdAllocator,
}

impl RegistrationService {
    /// Creates a new registration service.
    pub fn new(repository: Arc<dyn UrlRepository>, allocator: IdAllocator) -> Self {
        Self {
            repository,
            allocator,
        }
    }

    /// Registers a URL under a freshly allocated identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Cancelled`] if identifier allocation exhausts its
    /// budget, [`AppError::AlreadyExists`] if a concurrent registration claims
    /// the allocated identifier first (the insert is not retried), and any
    /// store failure verbatim.
    pub async fn create(&self, original_url: String) -> Result<ShortUrl, AppError> {
        if let Some(existing) = self.repository.find_by_original_url(&original_url).await? {
            return Ok(existing);
        }

        let id = self.allocator.allocate().await?;
        self.insert_new(id, original_url).await
    }

    /// Registers a URL under a caller-chosen identifier.
    ///
    /// A record that already exists for `original_url` wins over the supplied
    /// identifier and is returned unchanged. Otherwise the identifier must be
    /// free: a taken identifier fails with [`AppError::AlreadyExists`] and is
    /// never silently replaced by a random one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty identifier,
    /// [`AppError::AlreadyExists`] for a taken one, and any store failure
    /// verbatim.
    pub async fn create_with_custom_id(
        &self,
        original_url: String,
        custom_id: String,
    ) -> Result<ShortUrl, AppError> {
        if custom_id.is_empty() {
            return Err(AppError::bad_request(
                "Custom identifier must not be empty",
                json!({}),
            ));
        }

        if let Some(existing) = self.repository.find_by_original_url(&original_url).await? {
            return Ok(existing);
        }

        if self.repository.exists(&custom_id).await? {
            return Err(AppError::already_exists(
                "Identifier already taken",
                json!({ "id": custom_id }),
            ));
        }

        self.insert_new(custom_id, original_url).await
    }

    async fn insert_new(&self, id: String, original_url: String) -> Result<ShortUrl, AppError> {
        let new_record = NewShortUrl {
            id,
            original_url,
            click_count: 0,
            created_date: Utc::now(),
        };

        self.repository.insert(new_record).await
    }
}
