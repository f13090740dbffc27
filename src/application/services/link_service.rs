//! Link creation, lookup, and redirect resolution service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_normalizer::normalize_url;

/// Maximum code allocation attempts before giving up.
const MAX_CODE_ATTEMPTS: usize = 10;

/// Service for creating, retrieving, and resolving shortened links.
///
/// Handles URL normalization, code allocation, and deduplication to ensure
/// consistent and collision-free short URLs.
pub struct LinkService<R: LinkRepository> {
    repository: Arc<R>,
    base_url: String,
}

impl<R: LinkRepository> LinkService<R> {
    /// Creates a new link service.
    ///
    /// `base_url` is the public origin short URLs are built from, e.g.
    /// `https://s.example.com`.
    pub fn new(repository: Arc<R>, base_url: String) -> Self {
        Self {
            repository,
            base_url,
        }
    }

    /// Creates a short link for a URL, or returns the existing one.
    ///
    /// # Deduplication
    ///
    /// If the normalized URL is already shortened, the existing link is
    /// returned instead of allocating a second code.
    ///
    /// # Code Allocation
    ///
    /// Candidate codes are inserted directly; the store enforces uniqueness
    /// at insert time and the service retries on conflict, up to
    /// [`MAX_CODE_ATTEMPTS`] times.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is malformed or uses an
    /// unsupported scheme. Returns [`AppError::Internal`] if the collision
    /// budget is exhausted.
    pub async fn create_short_link(&self, long_url: String) -> Result<Link, AppError> {
        let normalized_url =
            normalize_url(&long_url).map_err(|e| AppError::bad_request(e.to_string()))?;

        if let Some(existing_link) = self.repository.find_by_long_url(&normalized_url).await? {
            return Ok(existing_link);
        }

        for _ in 0..MAX_CODE_ATTEMPTS {
            let new_link = NewLink {
                code: generate_code(),
                long_url: normalized_url.clone(),
            };

            match self.repository.insert(new_link).await {
                Ok(link) => return Ok(link),
                Err(AppError::Conflict(_)) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to allocate a unique short code",
        ))
    }

    /// Retrieves a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn get_link_by_code(&self, code: &str) -> Result<Link, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Short code '{code}' not found")))
    }

    /// Resolves a short code for redirecting.
    ///
    /// Looks the code up, counts the click, and returns the destination URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn resolve_redirect(&self, code: &str) -> Result<String, AppError> {
        let link = self.get_link_by_code(code).await?;

        self.repository.increment_clicks(&link.code).await?;

        Ok(link.long_url)
    }

    /// Lists stored links, newest first.
    pub async fn list_recent(&self, offset: i64, limit: i64) -> Result<Vec<Link>, AppError> {
        self.repository.list(offset, limit).await
    }

    /// Counts all stored links.
    pub async fn count_links(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}
