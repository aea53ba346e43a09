//! Cross-cutting helpers shared by gatepass services.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
