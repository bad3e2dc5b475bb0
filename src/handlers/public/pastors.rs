use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::database::models::Pastor;
use crate::error::ApiError;
use crate::handlers::AppState;

/// GET /api/pastors - alphabetical
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Pastor>>, ApiError> {
    let pastors = state.storage.all_pastors().await?;
    Ok(Json(pastors))
}

/// GET /api/pastors/:id
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Pastor>, ApiError> {
    let pastor = state
        .storage
        .pastor_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Pastor not found"))?;
    Ok(Json(pastor))
}
