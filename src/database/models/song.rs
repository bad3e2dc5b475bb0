use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: Uuid,
    pub title: String,
    pub artist_id: Uuid,
    pub album_id: Option<Uuid>,
    pub duration: Option<i32>,
    pub lyrics: Option<String>,
    pub audio_url: Option<String>,
    pub genre: Option<String>,
    pub play_count: i32,
    pub created_at: DateTime<Utc>,
}
