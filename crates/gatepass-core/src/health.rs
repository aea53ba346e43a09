use axum::http::StatusCode;

/// Handler for `GET /healthz` — liveness only, always 200 while the process
/// serves requests. Readiness lives with each service, next to the
/// resources it checks.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
