#![allow(async_fn_in_trait)]

use chrono::NaiveDate;
use uuid::Uuid;

use gatepass_auth_types::phone::PhoneNumber;

use crate::domain::types::{
    Announcement, EmergencyContact, GatePass, OtpChallenge, Resident,
};
use crate::error::AccessServiceError;

/// Repository for the resident directory.
pub trait ResidentRepository: Send + Sync {
    /// Look up a resident by canonical local phone.
    async fn find_by_phone(&self, phone: &str) -> Result<Option<Resident>, AccessServiceError>;

    /// All residents, newest first.
    async fn list(&self) -> Result<Vec<Resident>, AccessServiceError>;

    /// Insert a resident. Fails `ResidentAlreadyExists` on a duplicate phone.
    async fn create(&self, resident: &Resident) -> Result<(), AccessServiceError>;

    /// Set the admin flag. Returns `false` if the resident does not exist.
    async fn set_admin(&self, id: Uuid, is_admin: bool) -> Result<bool, AccessServiceError>;

    /// Delete a resident. Returns `false` if the resident does not exist.
    async fn delete(&self, id: Uuid) -> Result<bool, AccessServiceError>;
}

/// Repository for pending OTP challenges.
///
/// Rows are keyed by canonical phone; `upsert` overwrites any pending
/// challenge so at most one is live per phone. Finders return expired rows
/// as-is — expiry is the caller's check, there is no background cleanup.
pub trait OtpChallengeRepository: Send + Sync {
    async fn find_by_phone(&self, phone: &str)
    -> Result<Option<OtpChallenge>, AccessServiceError>;

    async fn upsert(&self, challenge: &OtpChallenge) -> Result<(), AccessServiceError>;

    /// Increment the failed-attempt counter for a pending challenge.
    async fn record_failed_attempt(&self, phone: &str) -> Result<(), AccessServiceError>;

    async fn delete(&self, phone: &str) -> Result<(), AccessServiceError>;
}

/// Repository for daily gate codes.
pub trait GatePassRepository: Send + Sync {
    async fn find_by_date(&self, date: NaiveDate)
    -> Result<Option<GatePass>, AccessServiceError>;

    /// Insert a gate pass. Returns `false` if the date is already taken
    /// (a concurrent writer won the day) — the caller re-reads instead.
    async fn insert(&self, pass: &GatePass) -> Result<bool, AccessServiceError>;
}

/// Repository for announcements.
pub trait AnnouncementRepository: Send + Sync {
    /// Most recent announcements, newest first.
    async fn list_recent(&self, limit: u64) -> Result<Vec<Announcement>, AccessServiceError>;

    async fn create(&self, announcement: &Announcement) -> Result<(), AccessServiceError>;
}

/// Repository for the emergency directory.
pub trait EmergencyContactRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<EmergencyContact>, AccessServiceError>;
}

/// Outbound messaging collaborator (SMS/WhatsApp behind one contract).
///
/// Implementations deliver the code to the international wire form of the
/// phone and must never log the code itself.
pub trait OtpSender: Send + Sync {
    async fn send_code(&self, phone: &PhoneNumber, code: &str)
    -> Result<(), AccessServiceError>;
}
