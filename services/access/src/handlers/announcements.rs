use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::Announcement;
use crate::error::AccessServiceError;
use crate::state::AppState;
use crate::usecase::announcement::{
    CreateAnnouncementInput, CreateAnnouncementUseCase, ListAnnouncementsUseCase,
};

#[derive(Serialize)]
pub struct AnnouncementResponse {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub is_important: bool,
    #[serde(serialize_with = "gatepass_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<Announcement> for AnnouncementResponse {
    fn from(a: Announcement) -> Self {
        Self {
            id: a.id,
            title: a.title,
            message: a.message,
            is_important: a.is_important,
            created_at: a.created_at,
        }
    }
}

pub async fn list_announcements(
    State(state): State<AppState>,
) -> Result<Json<Vec<AnnouncementResponse>>, AccessServiceError> {
    let usecase = ListAnnouncementsUseCase {
        announcements: state.announcement_repo(),
    };
    let announcements = usecase.execute().await?;
    Ok(Json(announcements.into_iter().map(Into::into).collect()))
}

#[derive(Deserialize)]
pub struct CreateAnnouncementRequest {
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub is_important: bool,
}

pub async fn create_announcement(
    State(state): State<AppState>,
    Json(body): Json<CreateAnnouncementRequest>,
) -> Result<(StatusCode, Json<AnnouncementResponse>), AccessServiceError> {
    let usecase = CreateAnnouncementUseCase {
        announcements: state.announcement_repo(),
    };
    let announcement = usecase
        .execute(CreateAnnouncementInput {
            title: body.title,
            message: body.message,
            is_important: body.is_important,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(announcement.into())))
}
