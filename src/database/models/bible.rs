use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BibleVerse {
    pub id: Uuid,
    pub book: String,
    pub chapter: i32,
    pub verse: i32,
    pub text: String,
    pub translation: String,
}
