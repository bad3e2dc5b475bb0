use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::target::ListenTarget;
use crate::error::FieldError;

/// Append-only listening log entry.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub song_id: Option<Uuid>,
    pub sermon_id: Option<Uuid>,
    pub played_at: DateTime<Utc>,
    pub duration: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHistoryRequest {
    pub song_id: Option<Uuid>,
    pub sermon_id: Option<Uuid>,
    pub duration: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct NewHistoryEntry {
    pub target: ListenTarget,
    pub duration: Option<i32>,
}

impl CreateHistoryRequest {
    pub fn validate(self) -> Result<NewHistoryEntry, Vec<FieldError>> {
        let mut errors = Vec::new();

        let target = match ListenTarget::from_parts(self.song_id, self.sermon_id) {
            Ok(target) => Some(target),
            Err(msg) => {
                errors.push(FieldError::new("songId", msg));
                None
            }
        };

        if let Some(duration) = self.duration {
            if duration < 0 {
                errors.push(FieldError::new("duration", "must not be negative"));
            }
        }

        match target {
            Some(target) if errors.is_empty() => Ok(NewHistoryEntry {
                target,
                duration: self.duration,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sermon_play_with_duration() {
        let id = Uuid::new_v4();
        let payload = CreateHistoryRequest {
            sermon_id: Some(id),
            duration: Some(1800),
            ..Default::default()
        };
        let entry = payload.validate().expect("valid payload");
        assert_eq!(entry.target, ListenTarget::Sermon(id));
        assert_eq!(entry.duration, Some(1800));
    }

    #[test]
    fn negative_duration_rejected() {
        let payload = CreateHistoryRequest {
            song_id: Some(Uuid::new_v4()),
            duration: Some(-5),
            ..Default::default()
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.field == "duration"));
    }

    #[test]
    fn target_is_still_required() {
        let payload = CreateHistoryRequest {
            duration: Some(60),
            ..Default::default()
        };
        assert!(payload.validate().is_err());
    }
}
