use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Sermon {
    pub id: Uuid,
    pub title: String,
    pub pastor_id: Uuid,
    pub church_id: Option<Uuid>,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub audio_url: Option<String>,
    pub video_url: Option<String>,
    pub duration: Option<i32>,
    pub category: Option<String>,
    pub scripture: Option<String>,
    pub play_count: i32,
    pub created_at: DateTime<Utc>,
}
