use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::FieldError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_public: bool,
    pub cover_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistSong {
    pub id: Uuid,
    pub playlist_id: Uuid,
    pub song_id: Uuid,
    pub position: i32,
    pub added_at: DateTime<Utc>,
}

/// Incoming playlist payload as the client sends it. Everything is optional
/// at the wire level; `validate` decides what was actually required.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlaylistRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_public: Option<bool>,
    pub cover_url: Option<String>,
}

/// Validated playlist fields ready for insertion. The owning user id is
/// never part of the payload; it comes from the authenticated caller.
#[derive(Debug, Clone)]
pub struct NewPlaylist {
    pub name: String,
    pub description: Option<String>,
    pub is_public: bool,
    pub cover_url: Option<String>,
}

impl CreatePlaylistRequest {
    pub fn validate(self) -> Result<NewPlaylist, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = match self.name.map(|n| n.trim().to_string()) {
            Some(name) if !name.is_empty() => Some(name),
            Some(_) => {
                errors.push(FieldError::new("name", "must not be empty"));
                None
            }
            None => {
                errors.push(FieldError::new("name", "is required"));
                None
            }
        };

        match name {
            Some(name) if errors.is_empty() => Ok(NewPlaylist {
                name,
                description: self.description,
                is_public: self.is_public.unwrap_or(false),
                cover_url: self.cover_url,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_minimal_payload() {
        let payload = CreatePlaylistRequest {
            name: Some("Morning Worship".into()),
            ..Default::default()
        };
        let new = payload.validate().expect("valid payload");
        assert_eq!(new.name, "Morning Worship");
        assert!(!new.is_public);
        assert!(new.description.is_none());
    }

    #[test]
    fn rejects_missing_name() {
        let errors = CreatePlaylistRequest::default().validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
    }

    #[test]
    fn rejects_blank_name() {
        let payload = CreatePlaylistRequest {
            name: Some("   ".into()),
            ..Default::default()
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn keeps_explicit_visibility() {
        let payload = CreatePlaylistRequest {
            name: Some("Shared".into()),
            is_public: Some(true),
            ..Default::default()
        };
        assert!(payload.validate().unwrap().is_public);
    }
}
