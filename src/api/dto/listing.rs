//! DTOs for the URL listing endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pagination query parameters.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub page: Option<u32>,

    #[serde(default)]
    pub limit: Option<u32>,
}

impl ListQuery {
    pub const DEFAULT_LIMIT: u32 = 20;
    pub const MAX_LIMIT: u32 = 100;

    /// Validates pagination parameters and applies defaults.
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `limit`: 20
    ///
    /// # Validation
    ///
    /// - Page must be > 0 (pages are 1-based)
    /// - Limit must be between 1 and 100
    pub fn validate_and_get_page_limit(&self) -> Result<(u32, u32), String> {
        let page = self.page.unwrap_or(1);
        let limit = self.limit.unwrap_or(Self::DEFAULT_LIMIT);

        if page == 0 {
            return Err("Page must be greater than 0".to_string());
        }

        if !(1..=Self::MAX_LIMIT).contains(&limit) {
            return Err(format!("Limit must be between 1 and {}", Self::MAX_LIMIT));
        }

        Ok((page, limit))
    }
}

/// One page of registered URLs.
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub page: u32,
    pub limit: u32,
    pub items: Vec<UrlSummary>,
}

/// A registered URL, projected for API consumers.
#[derive(Debug, Serialize)]
pub struct UrlSummary {
    pub id: String,
    pub original_url: String,
    pub short_url: String,
    pub click_count: u64,
    pub created_date: DateTime<Utc>,
}
