use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::database::models::Artist;
use crate::error::ApiError;
use crate::handlers::AppState;

/// GET /api/artists - alphabetical
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Artist>>, ApiError> {
    let artists = state.storage.all_artists().await?;
    Ok(Json(artists))
}

/// GET /api/artists/:id
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Artist>, ApiError> {
    let artist = state
        .storage
        .artist_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Artist not found"))?;
    Ok(Json(artist))
}
