//! Handler for the link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::link::ShortLinkBody;
use crate::api::dto::shorten::ShortenRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL, or returns the existing one.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/page" }
/// ```
///
/// # Deduplication
///
/// Submitting a URL that is already shortened returns the existing record
/// (same code, current click count) instead of allocating a new code.
///
/// # Response
///
/// ```json
/// {
///   "short_code": "Ab3xYz_9",
///   "short_url": "https://s.example.com/Ab3xYz_9",
///   "original_url": "https://example.com/page",
///   "clicks": 0,
///   "created_at": "2026-08-06T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is empty, oversized, malformed, or
/// uses a scheme other than HTTP/HTTPS.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortLinkBody>, AppError> {
    payload.validate()?;

    let link = state.link_service.create_short_link(payload.url).await?;
    let short_url = state.link_service.short_url(&link.code);

    Ok(Json(ShortLinkBody::from_link(link, short_url)))
}
