use axum::{extract::State, Extension, Json};

use crate::database::models::User;
use crate::error::ApiError;
use crate::handlers::AppState;
use crate::middleware::AuthUser;

/// GET /api/auth/user - the caller's own record.
///
/// The row is upserted from the token claims on every call, which is what
/// materializes a user on first login and keeps the profile in step with the
/// identity provider afterwards.
pub async fn current_user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<User>, ApiError> {
    let user = state.storage.upsert_user(auth.to_upsert()).await?;
    Ok(Json(user))
}
