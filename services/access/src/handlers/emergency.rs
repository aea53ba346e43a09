use axum::{Json, extract::State};
use serde::Serialize;
use uuid::Uuid;

use crate::error::AccessServiceError;
use crate::state::AppState;
use crate::usecase::emergency::ListEmergencyContactsUseCase;

#[derive(Serialize)]
pub struct EmergencyContactResponse {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub title: String,
}

pub async fn list_emergency_contacts(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmergencyContactResponse>>, AccessServiceError> {
    let usecase = ListEmergencyContactsUseCase {
        contacts: state.emergency_contact_repo(),
    };
    let contacts = usecase.execute().await?;
    Ok(Json(
        contacts
            .into_iter()
            .map(|c| EmergencyContactResponse {
                id: c.id,
                name: c.name,
                phone: c.phone,
                title: c.title,
            })
            .collect(),
    ))
}
