//! In-memory implementation of the link repository.
//!
//! Built on sharded concurrent maps. Each map entry is guarded by its shard
//! lock, which gives the two guarantees the store contract needs without any
//! external coordination:
//!
//! - `insert` goes through the entry API, so the existence check and the
//!   write are a single serialized step per code - two racing inserts of the
//!   same code cannot both succeed.
//! - `increment_clicks` mutates the record under exclusive shard access, so
//!   concurrent resolutions of the same code never lose an update.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Concurrency-safe in-memory link store.
///
/// Holds the canonical code-to-link map plus a secondary index from
/// normalized long URL to code for deduplication lookups. The URL index is
/// written only after a successful insert and keeps the first writer on a
/// race, so it never points at a missing record.
pub struct MemoryLinkRepository {
    links: DashMap<String, Link>,
    codes_by_url: DashMap<String, String>,
    next_id: AtomicI64,
}

impl MemoryLinkRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            links: DashMap::new(),
            codes_by_url: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryLinkRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        match self.links.entry(new_link.code.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "Short code '{}' already exists",
                new_link.code
            ))),
            Entry::Vacant(slot) => {
                let link = Link::new(
                    self.next_id.fetch_add(1, Ordering::Relaxed),
                    new_link.code,
                    new_link.long_url,
                    Utc::now(),
                );
                slot.insert(link.clone());

                // First writer wins; later duplicates keep resolving to the
                // code that is already indexed.
                self.codes_by_url
                    .entry(link.long_url.clone())
                    .or_insert_with(|| link.code.clone());

                Ok(link)
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.links.get(code).map(|entry| entry.value().clone()))
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<Link>, AppError> {
        // Clone the code out before touching the primary map so no two shard
        // locks are ever held at once.
        let code = match self.codes_by_url.get(long_url) {
            Some(entry) => entry.value().clone(),
            None => return Ok(None),
        };

        self.find_by_code(&code).await
    }

    async fn increment_clicks(&self, code: &str) -> Result<i64, AppError> {
        match self.links.get_mut(code) {
            Some(mut entry) => {
                entry.clicks += 1;
                entry.last_clicked = Some(Utc::now());
                Ok(entry.clicks)
            }
            None => Err(AppError::not_found(format!(
                "Short code '{code}' not found"
            ))),
        }
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Link>, AppError> {
        let mut links: Vec<Link> = self
            .links
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        // Newest first; ids break ties between same-instant creations.
        links.sort_unstable_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(links
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.links.len() as i64)
    }
}
