use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::Resident;
use crate::error::AccessServiceError;
use crate::state::AppState;
use crate::usecase::resident::{
    CreateResidentInput, CreateResidentUseCase, DeleteResidentUseCase, ListResidentsUseCase,
    SetResidentAdminUseCase,
};

#[derive(Serialize)]
pub struct ResidentResponse {
    pub id: Uuid,
    pub phone: String,
    pub full_name: String,
    pub house_number: String,
    pub is_admin: bool,
    #[serde(serialize_with = "gatepass_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<Resident> for ResidentResponse {
    fn from(r: Resident) -> Self {
        Self {
            id: r.id,
            phone: r.phone,
            full_name: r.full_name,
            house_number: r.house_number,
            is_admin: r.is_admin,
            created_at: r.created_at,
        }
    }
}

pub async fn list_residents(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResidentResponse>>, AccessServiceError> {
    let usecase = ListResidentsUseCase {
        residents: state.resident_repo(),
    };
    let residents = usecase.execute().await?;
    Ok(Json(residents.into_iter().map(Into::into).collect()))
}

#[derive(Deserialize)]
pub struct CreateResidentRequest {
    pub phone: String,
    pub full_name: String,
    pub house_number: String,
}

pub async fn create_resident(
    State(state): State<AppState>,
    Json(body): Json<CreateResidentRequest>,
) -> Result<(StatusCode, Json<ResidentResponse>), AccessServiceError> {
    let usecase = CreateResidentUseCase {
        residents: state.resident_repo(),
    };
    let resident = usecase
        .execute(CreateResidentInput {
            phone: body.phone,
            full_name: body.full_name,
            house_number: body.house_number,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(resident.into())))
}

#[derive(Deserialize)]
pub struct SetAdminRequest {
    pub is_admin: bool,
}

pub async fn set_resident_admin(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<SetAdminRequest>,
) -> Result<StatusCode, AccessServiceError> {
    let usecase = SetResidentAdminUseCase {
        residents: state.resident_repo(),
    };
    usecase.execute(id, body.is_admin).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_resident(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AccessServiceError> {
    let usecase = DeleteResidentUseCase {
        residents: state.resident_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
