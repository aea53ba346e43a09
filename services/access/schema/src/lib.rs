//! sea-orm entities for the estate-access database.

pub mod announcements;
pub mod emergency_contacts;
pub mod gate_passes;
pub mod otp_sessions;
pub mod residents;
