//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the link store.
///
/// Short codes are the primary key: insertion enforces their uniqueness, and
/// the click counter is updated atomically per code so that concurrent
/// resolutions never lose an increment.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - concurrent in-memory store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new short link.
    ///
    /// The uniqueness of the code is enforced here, at insert time. Callers
    /// allocating generated codes retry with a fresh candidate on conflict.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code already exists.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Finds a link by its normalized long URL.
    ///
    /// Used to return the existing record when a URL has already been
    /// shortened instead of allocating a second code.
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<Link>, AppError>;

    /// Atomically increments the click counter and stamps `last_clicked`.
    ///
    /// Concurrent callers on the same code must each observe their own
    /// increment; no updates are lost.
    ///
    /// # Returns
    ///
    /// The click count after the increment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code does not exist.
    async fn increment_clicks(&self, code: &str) -> Result<i64, AppError>;

    /// Lists links ordered newest first.
    ///
    /// # Arguments
    ///
    /// - `offset` - Number of records to skip
    /// - `limit` - Maximum number of records to return
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Link>, AppError>;

    /// Counts all stored links.
    async fn count(&self) -> Result<i64, AppError>;
}
