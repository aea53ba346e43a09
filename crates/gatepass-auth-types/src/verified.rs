//! Verified-phone cookie extractor.

use axum::extract::FromRequestParts;
use axum_extra::extract::CookieJar;
use http::StatusCode;
use http::request::Parts;

use crate::cookie::VERIFIED_PHONE;
use crate::phone::PhoneNumber;

/// Phone identity asserted by the `verified_phone` cookie.
///
/// Returns 401 if the cookie is absent or its value does not normalize to a
/// valid phone number. The extracted number is canonical regardless of the
/// shape stored in the cookie, so handlers can use it as a lookup key
/// directly. Resident-level authorization (admin flag) is the route
/// authorizer's job, not this extractor's.
#[derive(Debug, Clone)]
pub struct VerifiedPhone(pub PhoneNumber);

impl<S> FromRequestParts<S> for VerifiedPhone
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let phone = CookieJar::from_headers(&parts.headers)
            .get(VERIFIED_PHONE)
            .and_then(|cookie| PhoneNumber::parse(cookie.value()).ok());

        async move {
            let phone = phone.ok_or(StatusCode::UNAUTHORIZED)?;
            Ok(Self(phone))
        }
    }
}
