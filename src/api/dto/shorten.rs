//! DTOs for the URL shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to register a URL.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// The original URL to shorten.
    pub url: String,

    /// Optional caller-chosen identifier. An empty string is treated the
    /// same as leaving the field out.
    #[serde(default)]
    pub custom_id: Option<String>,
}

/// The registered record, projected for API consumers.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub id: String,
    pub original_url: String,
    pub short_url: String,
    pub click_count: u64,
    pub created_date: DateTime<Utc>,
}
