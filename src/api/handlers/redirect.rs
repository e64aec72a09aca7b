//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short identifier to its original URL.
///
/// # Endpoint
///
/// `GET /{id}`
///
/// # Behavior
///
/// Resolving counts the visit: each successful redirect increments the
/// record's click counter. The destination is the stored URL, scheme-prefixed
/// when the submitter left the scheme off.
///
/// # Errors
///
/// Returns 404 Not Found if the identifier doesn't exist.
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let destination = state.resolution.resolve(&id).await?;

    Ok(Redirect::temporary(&destination))
}
