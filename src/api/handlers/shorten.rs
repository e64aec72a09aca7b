//! Handler for the URL shortening endpoint.

use axum::{Json, extract::State};
use serde_json::json;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a URL and returns its short form.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "custom_id": "mylnk"
/// }
/// ```
///
/// `custom_id` is optional; an empty string is treated as absent and a random
/// identifier is allocated instead.
///
/// # Idempotence
///
/// Submitting a URL that is already registered returns the existing record,
/// whether or not a custom identifier accompanies the request.
///
/// # Errors
///
/// Returns 400 Bad Request for an empty URL, 409 Conflict when the custom
/// identifier is taken, and 503 Service Unavailable when identifier
/// allocation runs out of time.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    if payload.url.is_empty() {
        return Err(AppError::bad_request(
            "URL must not be empty",
            json!({ "field": "url" }),
        ));
    }

    let custom_id = payload.custom_id.filter(|id| !id.is_empty());

    let record = match custom_id {
        Some(id) => {
            state
                .registration
                .create_with_custom_id(payload.url, id)
                .await?
        }
        None => state.registration.create(payload.url).await?,
    };

    let short_url = state.short_url(&record.id);

    Ok(Json(ShortenResponse {
        id: record.id,
        original_url: record.original_url,
        short_url,
        click_count: record.click_count,
        created_date: record.created_date,
    }))
}
