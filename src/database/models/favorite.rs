use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::target::ListenTarget;
use crate::error::FieldError;

/// A saved song or sermon. The column pair mirrors the stored shape; the
/// schema guarantees exactly one id is present.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: Uuid,
    pub user_id: Uuid,
    pub song_id: Option<Uuid>,
    pub sermon_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFavoriteRequest {
    pub song_id: Option<Uuid>,
    pub sermon_id: Option<Uuid>,
}

impl CreateFavoriteRequest {
    pub fn validate(self) -> Result<ListenTarget, Vec<FieldError>> {
        ListenTarget::from_parts(self.song_id, self.sermon_id)
            .map_err(|msg| vec![FieldError::new("songId", msg)])
    }
}
