use crate::domain::repository::EmergencyContactRepository;
use crate::domain::types::EmergencyContact;
use crate::error::AccessServiceError;

pub struct ListEmergencyContactsUseCase<E: EmergencyContactRepository> {
    pub contacts: E,
}

impl<E: EmergencyContactRepository> ListEmergencyContactsUseCase<E> {
    pub async fn execute(&self) -> Result<Vec<EmergencyContact>, AccessServiceError> {
        self.contacts.list().await
    }
}
