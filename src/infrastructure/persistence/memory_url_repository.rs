//! In-memory implementation of the URL repository.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::json;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

struct StoredRecord {
    record: ShortUrl,
    seq: u64,
}

/// Concurrent in-memory repository.
///
/// Backed by a sharded map; taking the map entry makes insert an atomic claim
/// on the identifier, so a concurrent double-insert fails with the same
/// duplicate error the SQL backends produce. Listing order is insertion
/// order, tracked by a monotonically increasing sequence number.
#[derive(Default)]
pub struct MemoryUrlRepository {
    records: DashMap<String, StoredRecord>,
    next_seq: AtomicU64,
}

impl MemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<ShortUrl>, AppError> {
        Ok(self.records.get(id).map(|entry| entry.record.clone()))
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<ShortUrl>, AppError> {
        // The oldest record wins when duplicates slipped in concurrently,
        // matching the SQL backends' ordered lookup.
        let found = self
            .records
            .iter()
            .filter(|entry| entry.value().record.original_url == original_url)
            .min_by_key(|entry| entry.value().seq)
            .map(|entry| entry.value().record.clone());

        Ok(found)
    }

    async fn exists(&self, id: &str) -> Result<bool, AppError> {
        Ok(self.records.contains_key(id))
    }

    async fn insert(&self, new_record: NewShortUrl) -> Result<ShortUrl, AppError> {
        match self.records.entry(new_record.id.clone()) {
            Entry::Occupied(_) => Err(AppError::already_exists(
                "Identifier already taken",
                json!({ "id": new_record.id }),
            )),
            Entry::Vacant(slot) => {
                let record = ShortUrl::new(
                    new_record.id,
                    new_record.original_url,
                    new_record.click_count,
                    new_record.created_date,
                );
                let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
                slot.insert(StoredRecord {
                    record: record.clone(),
                    seq,
                });
                Ok(record)
            }
        }
    }

    async fn update(&self, record: ShortUrl) -> Result<ShortUrl, AppError> {
        match self.records.get_mut(&record.id) {
            Some(mut stored) => {
                // Only the click counter is mutable once a record exists.
                stored.record.click_count = record.click_count;
                Ok(stored.record.clone())
            }
            None => Err(AppError::not_found(
                "Short URL not found",
                json!({ "id": record.id }),
            )),
        }
    }

    async fn list_page(&self, page: u32, limit: u32) -> Result<Vec<ShortUrl>, AppError> {
        let offset = (page.max(1) as usize - 1) * limit as usize;

        let mut entries: Vec<(u64, ShortUrl)> = self
            .records
            .iter()
            .map(|entry| (entry.value().seq, entry.value().record.clone()))
            .collect();
        entries.sort_by_key(|(seq, _)| *seq);

        Ok(entries
            .into_iter()
            .skip(offset)
            .take(limit as usize)
            .map(|(_, record)| record)
            .collect())
    }
}
