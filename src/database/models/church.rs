use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Church {
    pub id: Uuid,
    pub name: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub banner_url: Option<String>,
    pub logo_url: Option<String>,
    pub member_count: i32,
    pub created_at: DateTime<Utc>,
}
