use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::database::models::Sermon;
use crate::error::ApiError;
use crate::handlers::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SermonListQuery {
    pub pastor_id: Option<Uuid>,
    pub church_id: Option<Uuid>,
    pub category: Option<String>,
}

/// The single filter a sermon listing honours. When more than one parameter
/// is supplied the precedence is pastor, then church, then category; the
/// rest are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SermonFilter {
    Pastor(Uuid),
    Church(Uuid),
    Category(String),
    All,
}

impl SermonListQuery {
    pub fn into_filter(self) -> SermonFilter {
        if let Some(pastor_id) = self.pastor_id {
            SermonFilter::Pastor(pastor_id)
        } else if let Some(church_id) = self.church_id {
            SermonFilter::Church(church_id)
        } else if let Some(category) = self.category {
            SermonFilter::Category(category)
        } else {
            SermonFilter::All
        }
    }
}

/// GET /api/sermons - optionally filtered by pastor, church, or category
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<SermonListQuery>,
) -> Result<Json<Vec<Sermon>>, ApiError> {
    let sermons = match query.into_filter() {
        SermonFilter::Pastor(pastor_id) => state.storage.sermons_by_pastor(pastor_id).await?,
        SermonFilter::Church(church_id) => state.storage.sermons_by_church(church_id).await?,
        SermonFilter::Category(category) => state.storage.sermons_by_category(&category).await?,
        SermonFilter::All => state.storage.all_sermons().await?,
    };
    Ok(Json(sermons))
}

/// GET /api/sermons/:id
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Sermon>, ApiError> {
    let sermon = state
        .storage
        .sermon_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Sermon not found"))?;
    Ok(Json(sermon))
}
