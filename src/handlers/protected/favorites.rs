use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use uuid::Uuid;

use crate::database::models::{CreateFavoriteRequest, Favorite};
use crate::error::ApiError;
use crate::handlers::AppState;
use crate::middleware::AuthUser;

/// GET /api/favorites - the caller's favorites, newest first
pub async fn list(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<Vec<Favorite>>, ApiError> {
    let favorites = state.storage.favorites_for_user(auth.id).await?;
    Ok(Json(favorites))
}

/// POST /api/favorites - save a song or a sermon (exactly one)
pub async fn create(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<CreateFavoriteRequest>,
) -> Result<(StatusCode, Json<Favorite>), ApiError> {
    let target = payload
        .validate()
        .map_err(|errors| ApiError::validation("Invalid favorite data", errors))?;

    let favorite = state.storage.add_favorite(auth.id, target).await?;
    Ok((StatusCode::CREATED, Json(favorite)))
}

/// DELETE /api/favorites/:id
///
/// No ownership check, matching the original surface; any authenticated
/// caller can remove any favorite by id.
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.storage.remove_favorite(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
