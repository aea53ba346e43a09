//! Authentication vocabulary shared across the gatepass services: canonical
//! phone numbers, the verified-phone cookie, and its request extractor.

pub mod cookie;
pub mod phone;
pub mod verified;
