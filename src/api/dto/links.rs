//! DTOs for the recent links listing endpoint.

use serde::Serialize;

use super::link::ShortLinkBody;
use super::pagination::PaginationMeta;

/// Paginated list of stored links, newest first.
#[derive(Debug, Serialize)]
pub struct LinkListResponse {
    pub pagination: PaginationMeta,
    pub items: Vec<ShortLinkBody>,
}
