//! Handler for per-link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::link::ShortLinkBody;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves the stored record for a short code.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// Returns the same body as the shorten endpoint with the current click
/// count and last click time.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<ShortLinkBody>, AppError> {
    let link = state.link_service.get_link_by_code(&code).await?;
    let short_url = state.link_service.short_url(&link.code);

    Ok(Json(ShortLinkBody::from_link(link, short_url)))
}
