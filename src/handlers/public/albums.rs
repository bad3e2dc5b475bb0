use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::database::models::Album;
use crate::error::ApiError;
use crate::handlers::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumListQuery {
    pub artist_id: Option<Uuid>,
}

/// GET /api/albums - all albums, or one artist's discography when
/// `artistId` is supplied
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<AlbumListQuery>,
) -> Result<Json<Vec<Album>>, ApiError> {
    let albums = match query.artist_id {
        Some(artist_id) => state.storage.albums_by_artist(artist_id).await?,
        None => state.storage.all_albums().await?,
    };
    Ok(Json(albums))
}
