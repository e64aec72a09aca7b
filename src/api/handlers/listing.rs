//! Handler for the URL listing endpoint.

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::json;

use crate::api::dto::listing::{ListQuery, ListResponse, UrlSummary};
use crate::error::AppError;
use crate::state::AppState;

/// Lists registered URLs, one page at a time.
///
/// # Endpoint
///
/// `GET /api/urls`
///
/// # Query Parameters
///
/// - `page` (optional): 1-based page number (default: 1)
/// - `limit` (optional): items per page (default: 20, max: 100)
///
/// Records come back in a stable order; a page past the last record is an
/// empty list, not an error.
///
/// # Errors
///
/// Returns 400 Bad Request if pagination parameters are out of range.
pub async fn list_urls_handler(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<ListResponse>, AppError> {
    let (page, limit) = params
        .validate_and_get_page_limit()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let records = state.listing.list(page, limit).await?;

    let items = records
        .into_iter()
        .map(|record| {
            let short_url = state.short_url(&record.id);
            UrlSummary {
                id: record.id,
                original_url: record.original_url,
                short_url,
                click_count: record.click_count,
                created_date: record.created_date,
            }
        })
        .collect();

    Ok(Json(ListResponse { page, limit, items }))
}
