//! Short URL entity representing an identifier-to-URL mapping.

use chrono::{DateTime, Utc};

/// A stored short-URL record.
///
/// Maps a short identifier to the originally submitted URL, together with the
/// number of times the identifier has been resolved. The identifier and the
/// original URL are fixed once the record exists; only `click_count` changes
/// afterwards, and only upwards.
#[derive(Debug, Clone)]
pub struct ShortUrl {
    pub id: String,
    pub original_url: String,
    pub click_count: u64,
    pub created_date: DateTime<Utc>,
}

impl ShortUrl {
    /// Creates a new ShortUrl instance.
    pub fn new(
        id: String,
        original_url: String,
        click_count: u64,
        created_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            click_count,
            created_date,
        }
    }
}

/// Input data for inserting a new record.
///
/// Carries every column the store persists; registration fills `click_count`
/// with zero and `created_date` with the current time.
#[derive(Debug, Clone)]
pub struct NewShortUrl {
    pub id: String,
    pub original_url: String,
    pub click_count: u64,
    pub created_date: DateTime<Utc>,
}
