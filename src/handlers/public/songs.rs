use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::database::models::Song;
use crate::error::ApiError;
use crate::handlers::AppState;

/// GET /api/songs - full song catalog, newest first
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Song>>, ApiError> {
    let songs = state.storage.all_songs().await?;
    Ok(Json(songs))
}

/// GET /api/songs/:id
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Song>, ApiError> {
    let song = state
        .storage
        .song_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Song not found"))?;
    Ok(Json(song))
}
