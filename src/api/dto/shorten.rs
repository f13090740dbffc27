//! DTOs for the link shortening endpoint.

use serde::Deserialize;
use validator::Validate;

/// Request to shorten a URL.
///
/// The URL is normalized and validated by the link service; the DTO only
/// bounds its size (the store column width of the original data model).
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(length(min = 1, max = 500, message = "URL must be 1-500 characters"))]
    pub url: String,
}
