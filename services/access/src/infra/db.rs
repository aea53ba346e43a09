use anyhow::Context as _;
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, SqlErr,
    sea_query::{Expr, OnConflict},
};
use uuid::Uuid;

use gatepass_access_schema::{
    announcements, emergency_contacts, gate_passes, otp_sessions, residents,
};

use crate::domain::repository::{
    AnnouncementRepository, EmergencyContactRepository, GatePassRepository,
    OtpChallengeRepository, ResidentRepository,
};
use crate::domain::types::{Announcement, EmergencyContact, GatePass, OtpChallenge, Resident};
use crate::error::AccessServiceError;

fn is_unique_violation(err: &sea_orm::DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

// ── Resident repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbResidentRepository {
    pub db: DatabaseConnection,
}

impl ResidentRepository for DbResidentRepository {
    async fn find_by_phone(&self, phone: &str) -> Result<Option<Resident>, AccessServiceError> {
        let model = residents::Entity::find()
            .filter(residents::Column::Phone.eq(phone))
            .one(&self.db)
            .await
            .context("find resident by phone")?;
        Ok(model.map(resident_from_model))
    }

    async fn list(&self) -> Result<Vec<Resident>, AccessServiceError> {
        let models = residents::Entity::find()
            .order_by_desc(residents::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list residents")?;
        Ok(models.into_iter().map(resident_from_model).collect())
    }

    async fn create(&self, resident: &Resident) -> Result<(), AccessServiceError> {
        let result = residents::ActiveModel {
            id: Set(resident.id),
            phone: Set(resident.phone.clone()),
            full_name: Set(resident.full_name.clone()),
            house_number: Set(resident.house_number.clone()),
            is_admin: Set(resident.is_admin),
            created_at: Set(resident.created_at),
        }
        .insert(&self.db)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => Err(AccessServiceError::ResidentAlreadyExists),
            Err(e) => Err(anyhow::Error::new(e).context("create resident").into()),
        }
    }

    async fn set_admin(&self, id: Uuid, is_admin: bool) -> Result<bool, AccessServiceError> {
        let result = residents::Entity::update_many()
            .col_expr(residents::Column::IsAdmin, Expr::value(is_admin))
            .filter(residents::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("set resident admin flag")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AccessServiceError> {
        let result = residents::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete resident")?;
        Ok(result.rows_affected > 0)
    }
}

fn resident_from_model(model: residents::Model) -> Resident {
    Resident {
        id: model.id,
        phone: model.phone,
        full_name: model.full_name,
        house_number: model.house_number,
        is_admin: model.is_admin,
        created_at: model.created_at,
    }
}

// ── OTP challenge repository ─────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbOtpChallengeRepository {
    pub db: DatabaseConnection,
}

impl OtpChallengeRepository for DbOtpChallengeRepository {
    async fn find_by_phone(
        &self,
        phone: &str,
    ) -> Result<Option<OtpChallenge>, AccessServiceError> {
        // Expired rows are returned as-is; expiry is the usecase's check.
        let model = otp_sessions::Entity::find_by_id(phone)
            .one(&self.db)
            .await
            .context("find otp challenge")?;
        Ok(model.map(challenge_from_model))
    }

    async fn upsert(&self, challenge: &OtpChallenge) -> Result<(), AccessServiceError> {
        otp_sessions::Entity::insert(otp_sessions::ActiveModel {
            phone: Set(challenge.phone.clone()),
            code: Set(challenge.code.clone()),
            expires_at: Set(challenge.expires_at),
            attempts: Set(challenge.attempts),
            created_at: Set(challenge.created_at),
        })
        .on_conflict(
            OnConflict::column(otp_sessions::Column::Phone)
                .update_columns([
                    otp_sessions::Column::Code,
                    otp_sessions::Column::ExpiresAt,
                    otp_sessions::Column::Attempts,
                    otp_sessions::Column::CreatedAt,
                ])
                .to_owned(),
        )
        .exec(&self.db)
        .await
        .context("upsert otp challenge")?;
        Ok(())
    }

    async fn record_failed_attempt(&self, phone: &str) -> Result<(), AccessServiceError> {
        otp_sessions::Entity::update_many()
            .col_expr(
                otp_sessions::Column::Attempts,
                Expr::col(otp_sessions::Column::Attempts).add(1),
            )
            .filter(otp_sessions::Column::Phone.eq(phone))
            .exec(&self.db)
            .await
            .context("record failed otp attempt")?;
        Ok(())
    }

    async fn delete(&self, phone: &str) -> Result<(), AccessServiceError> {
        otp_sessions::Entity::delete_by_id(phone)
            .exec(&self.db)
            .await
            .context("delete otp challenge")?;
        Ok(())
    }
}

fn challenge_from_model(model: otp_sessions::Model) -> OtpChallenge {
    OtpChallenge {
        phone: model.phone,
        code: model.code,
        expires_at: model.expires_at,
        attempts: model.attempts,
        created_at: model.created_at,
    }
}

// ── Gate pass repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbGatePassRepository {
    pub db: DatabaseConnection,
}

impl GatePassRepository for DbGatePassRepository {
    async fn find_by_date(
        &self,
        date: NaiveDate,
    ) -> Result<Option<GatePass>, AccessServiceError> {
        let model = gate_passes::Entity::find_by_id(date)
            .one(&self.db)
            .await
            .context("find gate pass by date")?;
        Ok(model.map(|m| GatePass {
            date: m.date,
            code: m.code,
            created_at: m.created_at,
        }))
    }

    async fn insert(&self, pass: &GatePass) -> Result<bool, AccessServiceError> {
        let result = gate_passes::ActiveModel {
            date: Set(pass.date),
            code: Set(pass.code.clone()),
            created_at: Set(pass.created_at),
        }
        .insert(&self.db)
        .await;

        match result {
            Ok(_) => Ok(true),
            // A concurrent rotation won the date key; the caller re-reads.
            Err(e) if is_unique_violation(&e) => Ok(false),
            Err(e) => Err(anyhow::Error::new(e).context("insert gate pass").into()),
        }
    }
}

// ── Announcement repository ──────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAnnouncementRepository {
    pub db: DatabaseConnection,
}

impl AnnouncementRepository for DbAnnouncementRepository {
    async fn list_recent(&self, limit: u64) -> Result<Vec<Announcement>, AccessServiceError> {
        let models = announcements::Entity::find()
            .order_by_desc(announcements::Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .context("list announcements")?;
        Ok(models
            .into_iter()
            .map(|m| Announcement {
                id: m.id,
                title: m.title,
                message: m.message,
                is_important: m.is_important,
                created_at: m.created_at,
            })
            .collect())
    }

    async fn create(&self, announcement: &Announcement) -> Result<(), AccessServiceError> {
        announcements::ActiveModel {
            id: Set(announcement.id),
            title: Set(announcement.title.clone()),
            message: Set(announcement.message.clone()),
            is_important: Set(announcement.is_important),
            created_at: Set(announcement.created_at),
        }
        .insert(&self.db)
        .await
        .context("create announcement")?;
        Ok(())
    }
}

// ── Emergency contact repository ─────────────────────────────────────────────

#[derive(Clone)]
pub struct DbEmergencyContactRepository {
    pub db: DatabaseConnection,
}

impl EmergencyContactRepository for DbEmergencyContactRepository {
    async fn list(&self) -> Result<Vec<EmergencyContact>, AccessServiceError> {
        let models = emergency_contacts::Entity::find()
            .order_by_asc(emergency_contacts::Column::Name)
            .all(&self.db)
            .await
            .context("list emergency contacts")?;
        Ok(models
            .into_iter()
            .map(|m| EmergencyContact {
                id: m.id,
                name: m.name,
                phone: m.phone,
                title: m.title,
            })
            .collect())
    }
}
