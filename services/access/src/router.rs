use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, patch, post},
};
use tower_http::trace::TraceLayer;

use gatepass_core::health::healthz;
use gatepass_core::middleware::request_id_layer;

use crate::authorize::authorize;
use crate::handlers::{
    announcements::{create_announcement, list_announcements},
    auth::{check_session, create_session, delete_session, send_code},
    emergency::list_emergency_contacts,
    gate::get_gate_code,
    health::readyz,
    residents::{create_resident, delete_resident, list_residents, set_resident_admin},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Auth
        .route("/auth/code", post(send_code))
        .route("/auth/session", post(create_session))
        .route("/auth/session", get(check_session))
        .route("/auth/session", delete(delete_session))
        // Gate
        .route("/gate/code", get(get_gate_code))
        // Resident feeds
        .route("/announcements", get(list_announcements))
        .route("/emergency-contacts", get(list_emergency_contacts))
        // Admin
        .route("/admin/residents", get(list_residents))
        .route("/admin/residents", post(create_resident))
        .route("/admin/residents/{id}", patch(set_resident_admin))
        .route("/admin/residents/{id}", delete(delete_resident))
        .route("/admin/announcements", post(create_announcement))
        // The authorizer fronts every route, known or not.
        .layer(from_fn_with_state(state.clone(), authorize))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
