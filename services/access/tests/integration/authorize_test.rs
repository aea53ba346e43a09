use std::time::Duration;

use axum::http::{HeaderValue, StatusCode, header::COOKIE};
use axum_test::TestServer;

use gatepass_access::authorize::admin_gate;
use gatepass_access::router::build_router;
use gatepass_auth_types::phone::PhoneNumber;

use crate::helpers::{
    FailingResidentRepo, MockResidentRepo, SlowResidentRepo, test_app_state, test_resident,
};

fn phone() -> PhoneNumber {
    PhoneNumber::parse("08012345678").unwrap()
}

// ── admin_gate ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_admit_admin_resident() {
    let residents = MockResidentRepo::new(vec![test_resident("08012345678", true)]);
    assert!(admin_gate(&residents, &phone()).await);
}

#[tokio::test]
async fn should_deny_non_admin_resident() {
    let residents = MockResidentRepo::new(vec![test_resident("08012345678", false)]);
    assert!(!admin_gate(&residents, &phone()).await);
}

#[tokio::test]
async fn should_deny_unknown_phone() {
    assert!(!admin_gate(&MockResidentRepo::empty(), &phone()).await);
}

#[tokio::test]
async fn should_deny_when_lookup_fails() {
    assert!(!admin_gate(&FailingResidentRepo, &phone()).await);
}

#[tokio::test(start_paused = true)]
async fn should_deny_when_lookup_exceeds_deadline() {
    // The directory would answer "admin" — but only after 6 seconds, past
    // the 5-second budget. The gate must not wait for it.
    let residents = SlowResidentRepo {
        resident: test_resident("08012345678", true),
        delay: Duration::from_secs(6),
    };
    assert!(!admin_gate(&residents, &phone()).await);
}

#[tokio::test(start_paused = true)]
async fn should_admit_admin_when_lookup_is_merely_slow() {
    let residents = SlowResidentRepo {
        resident: test_resident("08012345678", true),
        delay: Duration::from_secs(4),
    };
    assert!(admin_gate(&residents, &phone()).await);
}

// ── Full-router authorizer behavior ──────────────────────────────────────────
//
// The server runs against a database that fails every query: the authorizer
// must not touch storage on redirect/allow paths, and must fail closed when
// the admin check cannot be answered.

fn test_server() -> TestServer {
    TestServer::new(build_router(test_app_state())).unwrap()
}

fn session_cookie() -> HeaderValue {
    HeaderValue::from_static("verified_phone=08012345678")
}

#[tokio::test]
async fn should_redirect_anonymous_to_login() {
    let server = test_server();
    let response = server.get("/dashboard").await;
    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "/auth/login");
}

#[tokio::test]
async fn should_treat_malformed_cookie_as_absent() {
    let server = test_server();
    let response = server
        .get("/dashboard")
        .add_header(COOKIE, HeaderValue::from_static("verified_phone=garbage"))
        .await;
    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "/auth/login");
}

#[tokio::test]
async fn should_serve_health_without_session() {
    let server = test_server();
    server.get("/healthz").await.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn should_answer_ready_when_database_reachable() {
    // Readiness pings the connection rather than running a query, so the
    // query-failure state still answers ready.
    let server = test_server();
    server.get("/readyz").await.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn should_pass_public_root_through() {
    let server = test_server();
    // No route is mounted at "/"; the authorizer lets the request through
    // and the router answers 404 instead of redirecting.
    server
        .get("/")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_allow_auth_endpoints_without_session() {
    let server = test_server();
    // The request reaches the handler, which rejects the phone itself —
    // proof the authorizer did not intercept it.
    let response = server
        .post("/auth/code")
        .json(&serde_json::json!({ "phone": "not-a-phone" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_bounce_authenticated_user_off_login_page() {
    let server = test_server();
    let response = server
        .get("/auth/login")
        .add_header(COOKIE, session_cookie())
        .await;
    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "/dashboard");
}

#[tokio::test]
async fn should_fail_closed_on_admin_route_when_directory_unavailable() {
    let server = test_server();
    let response = server
        .get("/admin/residents")
        .add_header(COOKIE, session_cookie())
        .await;
    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "/dashboard");
}

#[tokio::test]
async fn should_let_session_through_to_protected_route() {
    let server = test_server();
    // The authorizer lets the request pass; the handler then hits the dead
    // database and surfaces an internal error rather than a redirect.
    let response = server
        .get("/announcements")
        .add_header(COOKIE, session_cookie())
        .await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}
