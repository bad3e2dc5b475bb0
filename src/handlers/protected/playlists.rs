use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use uuid::Uuid;

use crate::database::models::{CreatePlaylistRequest, Playlist};
use crate::error::ApiError;
use crate::handlers::AppState;
use crate::middleware::AuthUser;

/// GET /api/playlists - the caller's playlists, newest first
pub async fn list(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<Vec<Playlist>>, ApiError> {
    let playlists = state.storage.playlists_for_user(auth.id).await?;
    Ok(Json(playlists))
}

/// POST /api/playlists - create for the caller; the owner is always the
/// authenticated user, never taken from the payload
pub async fn create(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<CreatePlaylistRequest>,
) -> Result<(StatusCode, Json<Playlist>), ApiError> {
    let new_playlist = payload
        .validate()
        .map_err(|errors| ApiError::validation("Invalid playlist data", errors))?;

    let playlist = state.storage.create_playlist(auth.id, new_playlist).await?;
    Ok((StatusCode::CREATED, Json(playlist)))
}

/// GET /api/playlists/:id - visible to the owner unconditionally, to others
/// only when public
pub async fn show(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Playlist>, ApiError> {
    let playlist = state
        .storage
        .playlist_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Playlist not found"))?;

    if playlist.user_id != auth.id && !playlist.is_public {
        return Err(ApiError::forbidden("Access denied"));
    }

    Ok(Json(playlist))
}

/// DELETE /api/playlists/:id - owner only; playlist_songs rows cascade at
/// the schema level
pub async fn destroy(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let playlist = state
        .storage
        .playlist_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Playlist not found"))?;

    if playlist.user_id != auth.id {
        return Err(ApiError::forbidden("Access denied"));
    }

    state.storage.delete_playlist(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
