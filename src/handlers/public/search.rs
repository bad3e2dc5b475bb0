use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::database::SearchResults;
use crate::error::ApiError;
use crate::handlers::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// GET /api/search?q= - aggregate substring search across songs, artists,
/// sermons, and churches
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResults>, ApiError> {
    let q = query
        .q
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::bad_request("Search query is required"))?;

    let results = state.storage.search_all(&q).await?;
    Ok(Json(results))
}
