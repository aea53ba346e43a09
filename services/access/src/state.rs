use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbAnnouncementRepository, DbEmergencyContactRepository, DbGatePassRepository,
    DbOtpChallengeRepository, DbResidentRepository,
};
use crate::infra::sms::HttpSmsSender;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub sms: HttpSmsSender,
    pub secure_cookies: bool,
    pub max_verify_attempts: u32,
}

impl AppState {
    pub fn resident_repo(&self) -> DbResidentRepository {
        DbResidentRepository {
            db: self.db.clone(),
        }
    }

    pub fn otp_challenge_repo(&self) -> DbOtpChallengeRepository {
        DbOtpChallengeRepository {
            db: self.db.clone(),
        }
    }

    pub fn gate_pass_repo(&self) -> DbGatePassRepository {
        DbGatePassRepository {
            db: self.db.clone(),
        }
    }

    pub fn announcement_repo(&self) -> DbAnnouncementRepository {
        DbAnnouncementRepository {
            db: self.db.clone(),
        }
    }

    pub fn emergency_contact_repo(&self) -> DbEmergencyContactRepository {
        DbEmergencyContactRepository {
            db: self.db.clone(),
        }
    }
}
