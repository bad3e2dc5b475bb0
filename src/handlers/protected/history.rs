use axum::{extract::State, http::StatusCode, Extension, Json};

use crate::database::models::{CreateHistoryRequest, HistoryEntry};
use crate::error::ApiError;
use crate::handlers::AppState;
use crate::middleware::AuthUser;

/// GET /api/history - the caller's listening log, most recent first,
/// capped at 50 entries
pub async fn list(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<Vec<HistoryEntry>>, ApiError> {
    let entries = state.storage.history_for_user(auth.id).await?;
    Ok(Json(entries))
}

/// POST /api/history - append one play
pub async fn create(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<CreateHistoryRequest>,
) -> Result<(StatusCode, Json<HistoryEntry>), ApiError> {
    let entry = payload
        .validate()
        .map_err(|errors| ApiError::validation("Invalid history data", errors))?;

    let entry = state.storage.add_history_entry(auth.id, entry).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}
