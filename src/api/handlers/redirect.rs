//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Look the code up in the link store
/// 2. Atomically count the click
/// 3. Return 307 Temporary Redirect to the destination
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let long_url = state.link_service.resolve_redirect(&code).await?;

    debug!("Redirecting {} -> {}", code, long_url);

    Ok(Redirect::temporary(&long_url))
}
