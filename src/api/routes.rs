//! API route configuration.

use crate::api::handlers::{links_handler, shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// REST API routes consumed by the web UI.
///
/// # Endpoints
///
/// - `POST /shorten`       - Create a shortened URL
/// - `GET  /stats/{code}`  - Stored record for a short code
/// - `GET  /links`         - Recent links, newest first (paginated)
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/links", get(links_handler))
}
