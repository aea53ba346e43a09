use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// A person permitted estate access. `phone` is always the canonical local
/// form — it is the unique lookup key for both login and the admin gate.
#[derive(Debug, Clone)]
pub struct Resident {
    pub id: Uuid,
    pub phone: String,
    pub full_name: String,
    pub house_number: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

/// Pending one-time passcode challenge, at most one per phone.
#[derive(Debug, Clone)]
pub struct OtpChallenge {
    pub phone: String,
    pub code: String,
    pub expires_at: DateTime<Utc>,
    pub attempts: i32,
    pub created_at: DateTime<Utc>,
}

impl OtpChallenge {
    /// Expiry is evaluated at check time; an expired row is semantically
    /// absent even while it still exists in storage.
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// Shared gate-entry code for one calendar day.
#[derive(Debug, Clone)]
pub struct GatePass {
    pub date: NaiveDate,
    pub code: String,
    pub created_at: DateTime<Utc>,
}

/// Estate announcement.
#[derive(Debug, Clone)]
pub struct Announcement {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub is_important: bool,
    pub created_at: DateTime<Utc>,
}

/// Emergency contact entry.
#[derive(Debug, Clone)]
pub struct EmergencyContact {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub title: String,
}

/// One-time passcode length in digits.
pub const OTP_LEN: usize = 6;

/// One-time passcode time-to-live in seconds (5 minutes).
pub const OTP_TTL_SECS: i64 = 300;

/// Gate code length in characters.
pub const GATE_CODE_LEN: usize = 4;
