use axum::{extract::State, http::StatusCode};

use crate::state::AppState;

/// Handler for `GET /readyz` — the service is ready only while its database
/// answers a ping. Liveness (`/healthz`) stays unconditional in
/// `gatepass_core::health`.
pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    match state.db.ping().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "readiness probe failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
