//! Handler for the recent links listing.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::link::ShortLinkBody;
use crate::api::dto::links::LinkListResponse;
use crate::api::dto::pagination::{PaginationMeta, PaginationParams};
use crate::error::AppError;
use crate::state::AppState;

/// Lists stored links, newest first.
///
/// Feeds the UI's recent-links table; the first page with default size is
/// the ten most recently created links.
///
/// # Endpoint
///
/// `GET /api/links`
///
/// # Query Parameters
///
/// - `page` (optional): Page number (default: 1)
/// - `page_size` (optional): Items per page (default: 10, max: 100)
///
/// # Errors
///
/// Returns 400 Bad Request if pagination parameters are invalid.
pub async fn links_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<LinkListResponse>, AppError> {
    let (offset, limit) = params
        .validate_and_get_offset_limit()
        .map_err(AppError::bad_request)?;

    let page = params.page.unwrap_or(1);
    let page_size = params.page_size.unwrap_or(10);

    let links = state.link_service.list_recent(offset, limit).await?;
    let total_items = state.link_service.count_links().await?;

    let total_pages = (total_items as f64 / page_size as f64).ceil() as u32;

    let items = links
        .into_iter()
        .map(|link| {
            let short_url = state.link_service.short_url(&link.code);
            ShortLinkBody::from_link(link, short_url)
        })
        .collect();

    Ok(Json(LinkListResponse {
        pagination: PaginationMeta {
            page,
            page_size,
            total_items,
            total_pages,
        },
        items,
    }))
}
