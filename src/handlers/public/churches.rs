use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::database::models::Church;
use crate::error::ApiError;
use crate::handlers::AppState;

/// GET /api/churches - alphabetical
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Church>>, ApiError> {
    let churches = state.storage.all_churches().await?;
    Ok(Json(churches))
}

/// GET /api/churches/:id
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Church>, ApiError> {
    let church = state
        .storage
        .church_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Church not found"))?;
    Ok(Json(church))
}
