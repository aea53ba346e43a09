pub mod announcements;
pub mod auth;
pub mod emergency;
pub mod gate;
pub mod health;
pub mod residents;
