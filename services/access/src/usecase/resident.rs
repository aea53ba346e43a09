use chrono::Utc;
use uuid::Uuid;

use gatepass_auth_types::phone::PhoneNumber;

use crate::domain::repository::ResidentRepository;
use crate::domain::types::Resident;
use crate::error::AccessServiceError;

// ── ListResidents ────────────────────────────────────────────────────────────

pub struct ListResidentsUseCase<R: ResidentRepository> {
    pub residents: R,
}

impl<R: ResidentRepository> ListResidentsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Resident>, AccessServiceError> {
        self.residents.list().await
    }
}

// ── CreateResident ───────────────────────────────────────────────────────────

pub struct CreateResidentInput {
    pub phone: String,
    pub full_name: String,
    pub house_number: String,
}

pub struct CreateResidentUseCase<R: ResidentRepository> {
    pub residents: R,
}

impl<R: ResidentRepository> CreateResidentUseCase<R> {
    pub async fn execute(
        &self,
        input: CreateResidentInput,
    ) -> Result<Resident, AccessServiceError> {
        // Normalize at the door so the directory only ever holds the
        // canonical local form.
        let phone = PhoneNumber::parse(&input.phone)?;

        let resident = Resident {
            id: Uuid::new_v4(),
            phone: phone.local().to_owned(),
            full_name: input.full_name,
            house_number: input.house_number,
            is_admin: false,
            created_at: Utc::now(),
        };
        self.residents.create(&resident).await?;
        Ok(resident)
    }
}

// ── SetResidentAdmin ─────────────────────────────────────────────────────────

pub struct SetResidentAdminUseCase<R: ResidentRepository> {
    pub residents: R,
}

impl<R: ResidentRepository> SetResidentAdminUseCase<R> {
    pub async fn execute(&self, id: Uuid, is_admin: bool) -> Result<(), AccessServiceError> {
        if !self.residents.set_admin(id, is_admin).await? {
            return Err(AccessServiceError::ResidentNotFound);
        }
        Ok(())
    }
}

// ── DeleteResident ───────────────────────────────────────────────────────────

pub struct DeleteResidentUseCase<R: ResidentRepository> {
    pub residents: R,
}

impl<R: ResidentRepository> DeleteResidentUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), AccessServiceError> {
        if !self.residents.delete(id).await? {
            return Err(AccessServiceError::ResidentNotFound);
        }
        Ok(())
    }
}
