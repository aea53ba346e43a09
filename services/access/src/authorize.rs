use std::time::Duration;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use gatepass_auth_types::cookie::VERIFIED_PHONE;
use gatepass_auth_types::phone::PhoneNumber;

use crate::domain::repository::ResidentRepository;
use crate::state::AppState;

/// Budget for the admin-flag lookup. A database that cannot answer inside
/// this window is treated as having answered "not an admin".
pub const ADMIN_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

const PUBLIC_PATHS: &[&str] = &["/", "/auth/login", "/auth/verify", "/offline"];

const PUBLIC_PREFIXES: &[&str] = &[
    "/auth/",
    "/_next",
    "/favicon.ico",
    "/images",
    "/manifest",
    "/healthz",
    "/readyz",
];

fn is_public(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path) || PUBLIC_PREFIXES.iter().any(|p| path.starts_with(p))
}

/// What the authorizer decided for a request, before any I/O happens.
#[derive(Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Authenticated user on a login page; bounce to the dashboard.
    RedirectDashboard,
    /// Public route, no session required.
    Allow,
    /// Protected route without a session; bounce to login.
    RedirectLogin,
    /// Admin route; the resident's admin flag must be checked first.
    AdminGate,
    /// Protected route with a session.
    Proceed,
}

/// Pure routing table: path + session presence in, decision out.
/// Evaluated in order; the login-page bounce wins over the public list.
pub fn classify(path: &str, authenticated: bool) -> RouteDecision {
    if authenticated && (path == "/auth/login" || path == "/auth/verify") {
        return RouteDecision::RedirectDashboard;
    }
    if is_public(path) {
        return RouteDecision::Allow;
    }
    if !authenticated {
        return RouteDecision::RedirectLogin;
    }
    if path == "/admin" || path.starts_with("/admin/") {
        return RouteDecision::AdminGate;
    }
    RouteDecision::Proceed
}

/// Resolve the admin flag for `phone`, failing closed: a missing resident,
/// a lookup error, or a lookup slower than [`ADMIN_CHECK_TIMEOUT`] all
/// count as "not an admin".
pub async fn admin_gate<R: ResidentRepository>(residents: &R, phone: &PhoneNumber) -> bool {
    match tokio::time::timeout(ADMIN_CHECK_TIMEOUT, residents.find_by_phone(phone.local())).await
    {
        Ok(Ok(Some(resident))) => resident.is_admin,
        Ok(Ok(None)) => false,
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "admin check failed, denying");
            false
        }
        Err(_) => {
            tracing::warn!("admin check timed out, denying");
            false
        }
    }
}

pub async fn authorize(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    // A cookie that does not parse as a phone is the same as no cookie.
    let verified = jar
        .get(VERIFIED_PHONE)
        .and_then(|c| PhoneNumber::parse(c.value()).ok());

    let decision = classify(request.uri().path(), verified.is_some());

    match decision {
        RouteDecision::RedirectDashboard => Redirect::temporary("/dashboard").into_response(),
        RouteDecision::Allow | RouteDecision::Proceed => next.run(request).await,
        RouteDecision::RedirectLogin => Redirect::temporary("/auth/login").into_response(),
        RouteDecision::AdminGate => match verified {
            Some(phone) if admin_gate(&state.resident_repo(), &phone).await => {
                next.run(request).await
            }
            _ => Redirect::temporary("/dashboard").into_response(),
        },
    }
}
